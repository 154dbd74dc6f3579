// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::stop::Weather;

/// A destination offered by the editor's city search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogCity {
    pub name: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub weather: Weather,
}

impl CatalogCity {
    const fn new(
        name: &'static str,
        country: &'static str,
        lat: f64,
        lng: f64,
        weather: Weather,
    ) -> Self {
        Self {
            name,
            country,
            lat,
            lng,
            weather,
        }
    }

    /// Case-insensitive substring match against the city or its country.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.country.to_lowercase().contains(&needle)
    }
}

pub const POPULAR_CITIES: [CatalogCity; 12] = [
    CatalogCity::new("Париж", "Франция", 48.8566, 2.3522, Weather::Rainy),
    CatalogCity::new("Лондон", "Великобритания", 51.5074, -0.1278, Weather::Rainy),
    CatalogCity::new("Барселона", "Испания", 41.3851, 2.1734, Weather::Sunny),
    CatalogCity::new("Рим", "Италия", 41.9028, 12.4964, Weather::Sunny),
    CatalogCity::new("Амстердам", "Нидерланды", 52.3676, 4.9041, Weather::Rainy),
    CatalogCity::new("Прага", "Чехия", 50.0755, 14.4378, Weather::Cold),
    CatalogCity::new("Берлин", "Германия", 52.5200, 13.4050, Weather::Cold),
    CatalogCity::new("Вена", "Австрия", 48.2082, 16.3738, Weather::Cold),
    CatalogCity::new("Бангкок", "Таиланд", 13.7563, 100.5018, Weather::Sunny),
    CatalogCity::new("Токио", "Япония", 35.6762, 139.6503, Weather::Sunny),
    CatalogCity::new("Нью-Йорк", "США", 40.7128, -74.0060, Weather::Cold),
    CatalogCity::new("Сингапур", "Сингапур", 1.3521, 103.8198, Weather::Sunny),
];

/// Catalog entries matching `query`, in catalog order. An empty query
/// matches everything.
pub fn search(query: &str) -> Vec<&'static CatalogCity> {
    POPULAR_CITIES
        .iter()
        .filter(|city| city.matches(query))
        .collect()
}

pub fn find_by_name(name: &str) -> Option<&'static CatalogCity> {
    POPULAR_CITIES.iter().find(|city| city.name == name)
}
