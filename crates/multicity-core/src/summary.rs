// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::format;
use crate::stop::Stop;
use log::info;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub const SEARCH_SUCCESS: &str = "Билет найден! Задание выполнено";

pub const RECOMMENDATIONS: [&str; 4] = [
    "Рекомендуем оформить туристическую страховку для всех стран маршрута",
    "Проверьте визовые требования для каждой страны",
    "Учитывайте время на трансфер между аэропортом и отелем",
    "Бронируйте отели заранее для лучших цен",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Less than a day between arriving at and leaving an interior stop.
    ShortConnection { city: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ShortConnection { city } => write!(f, "Короткая стыковка в {}", city),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Перелет {} → {}", self.from, self.to)
    }
}

/// Display lines for one stop of the overview list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopLine {
    pub number: usize,
    pub title: String,
    pub arrival: Option<String>,
    pub stay: Option<String>,
    pub weather: String,
    pub event: Option<String>,
    pub transport: String,
    pub price: Option<String>,
}

impl StopLine {
    fn new(index: usize, stop: &Stop) -> Self {
        Self {
            number: index + 1,
            title: format!("{}, {}", stop.city, stop.country),
            arrival: (index > 0)
                .then(|| format!("Прибытие: {}", format::weekday_day_month(stop.arrival))),
            stay: (stop.days > 0)
                .then(|| format!("Продолжительность: {}", format::days_label(stop.days))),
            weather: format!("{} {}", stop.weather.glyph(), stop.weather.short_label()),
            event: stop.first_event().map(|e| format!("🎉 {}", e)),
            transport: stop.transport_glyphs(),
            price: stop.visible_price().map(str::to_string),
        }
    }
}

/// Read-only report over a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub total_days: u32,
    pub flight_count: usize,
    /// Sum of price midpoints, in roubles.
    pub estimated_cost: u64,
    pub warnings: Vec<Warning>,
    pub legs: Vec<Leg>,
    pub stops: Vec<StopLine>,
}

impl RouteSummary {
    pub fn of(stops: &[Stop]) -> Self {
        let total_days = stops.iter().fold(0u32, |acc, s| acc.saturating_add(s.days));
        let flight_count = stops.len().saturating_sub(1);
        let estimated_cost = stops
            .iter()
            .filter_map(Stop::price)
            .map(|range| range.midpoint())
            .fold(0u64, u64::saturating_add);

        let last = stops.len().saturating_sub(1);
        let warnings = stops
            .iter()
            .enumerate()
            .filter(|(i, s)| *i > 0 && *i < last && s.days < 1)
            .map(|(_, s)| Warning::ShortConnection {
                city: s.city.clone(),
            })
            .collect();

        let legs = stops
            .windows(2)
            .map(|pair| Leg {
                from: pair[0].city.clone(),
                to: pair[1].city.clone(),
            })
            .collect();

        let lines = stops
            .iter()
            .enumerate()
            .map(|(i, s)| StopLine::new(i, s))
            .collect();

        Self {
            total_days,
            flight_count,
            estimated_cost,
            warnings,
            legs,
            stops: lines,
        }
    }

    /// e.g. `"4 дня"`
    pub fn total_days_label(&self) -> String {
        format::days_label(self.total_days)
    }

    /// e.g. `"51 000 ₽"`
    pub fn formatted_cost(&self) -> String {
        format::rubles_rounded(self.estimated_cost)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Outcome of the "find tickets" action. No search is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNotice {
    pub message: &'static str,
    pub duration: Duration,
}

pub fn confirm_search(summary: &RouteSummary, toast_duration_ms: u64) -> SearchNotice {
    info!(
        "Ticket search confirmed: {} flights, {} days, estimate {}",
        summary.flight_count,
        summary.total_days,
        summary.formatted_cost()
    );
    SearchNotice {
        message: SEARCH_SUCCESS,
        duration: Duration::from_millis(toast_duration_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteStore;

    #[test]
    fn test_seed_summary() {
        let route = RouteStore::seeded();
        let summary = RouteSummary::of(route.list());

        assert_eq!(summary.total_days, 4);
        assert_eq!(summary.flight_count, 2);
        assert_eq!(summary.estimated_cost, 50_500);
        assert_eq!(summary.formatted_cost(), "51 000 ₽");
        assert!(!summary.has_warnings());
        assert_eq!(summary.total_days_label(), "4 дня");
    }

    #[test]
    fn test_legs_follow_order() {
        let summary = RouteSummary::of(RouteStore::seeded().list());
        let legs: Vec<String> = summary.legs.iter().map(|l| l.to_string()).collect();
        assert_eq!(legs, vec!["Перелет Москва → Дубай", "Перелет Дубай → Москва"]);
    }

    #[test]
    fn test_stop_lines() {
        let summary = RouteSummary::of(RouteStore::seeded().list());
        let first = &summary.stops[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.title, "Москва, Россия");
        assert_eq!(first.arrival, None);
        assert_eq!(first.stay, None);
        assert_eq!(first.price, None);
        assert_eq!(first.weather, "☀️ Тепло");

        let dubai = &summary.stops[1];
        assert_eq!(dubai.arrival.as_deref(), Some("Прибытие: ср, 4 июня"));
        assert_eq!(dubai.stay.as_deref(), Some("Продолжительность: 4 дня"));
        assert_eq!(dubai.price.as_deref(), Some("20 000 – 35 000 ₽"));
    }

    #[test]
    fn test_empty_and_single_routes() {
        let empty = RouteSummary::of(&[]);
        assert_eq!(empty.flight_count, 0);
        assert_eq!(empty.estimated_cost, 0);
        assert!(empty.legs.is_empty());

        let route = RouteStore::seeded();
        let single = RouteSummary::of(&route.list()[..1]);
        assert_eq!(single.flight_count, 0);
        assert!(single.warnings.is_empty());
    }

    #[test]
    fn test_search_notice() {
        let summary = RouteSummary::of(RouteStore::seeded().list());
        let notice = confirm_search(&summary, 4000);
        assert_eq!(notice.message, SEARCH_SUCCESS);
        assert_eq!(notice.duration, Duration::from_secs(4));
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = RouteSummary::of(RouteStore::seeded().list());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_days"], 4);
        assert_eq!(json["estimated_cost"], 50_500);
        assert_eq!(json["legs"][0]["to"], "Дубай");
    }
}
