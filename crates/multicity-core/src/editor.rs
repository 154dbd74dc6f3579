// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::catalog::{self, CatalogCity};
use crate::config::{PlannerConfig, MAX_STAY_DAYS, MIN_STAY_DAYS};
use crate::format;
use crate::route::RouteStore;
use crate::stop::{Stop, StopId, Weather, DEFAULT_PRICE_RANGE, DEFAULT_TRANSPORT};
use crate::PlannerError;
use chrono::NaiveDate;
use log::info;

#[derive(Debug, Clone, PartialEq)]
enum EditorMode {
    /// Adding a city that will be inserted at `index`.
    Create { index: usize },
    Edit { original: Stop },
}

/// City chosen in the editor, either from the catalog or the stop being
/// edited.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedCity {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub weather: Weather,
}

impl From<&CatalogCity> for SelectedCity {
    fn from(city: &CatalogCity) -> Self {
        Self {
            name: city.name.to_string(),
            country: city.country.to_string(),
            lat: city.lat,
            lng: city.lng,
            weather: city.weather,
        }
    }
}

impl From<&Stop> for SelectedCity {
    fn from(stop: &Stop) -> Self {
        Self {
            name: stop.city.clone(),
            country: stop.country.clone(),
            lat: stop.lat,
            lng: stop.lng,
            weather: stop.weather,
        }
    }
}

/// A finished stop, ready to be applied to the route.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Insert { index: usize, stop: Stop },
    Replace(Stop),
}

impl Commit {
    pub fn stop(&self) -> &Stop {
        match self {
            Commit::Insert { stop, .. } | Commit::Replace(stop) => stop,
        }
    }

    pub fn apply(self, route: &mut RouteStore) -> Result<(), PlannerError> {
        match self {
            Commit::Insert { index, stop } => {
                info!("Adding {} at position {}", stop.city, index);
                route.insert(index, stop)
            }
            Commit::Replace(stop) => {
                info!("Saving changes to {}", stop.city);
                route.update(stop);
                Ok(())
            }
        }
    }
}

/// Form state for adding or editing one stop.
///
/// Dropping the editor is the cancel path: nothing reaches the route until
/// [`save`](Self::save) returns a [`Commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct StopEditor {
    mode: EditorMode,
    query: String,
    selected: Option<SelectedCity>,
    arrival_text: String,
    days: u32,
    event: String,
}

impl StopEditor {
    pub fn create(index: usize, config: &PlannerConfig) -> Self {
        Self {
            mode: EditorMode::Create { index },
            query: String::new(),
            selected: None,
            arrival_text: String::new(),
            days: config.initial_stay(),
            event: String::new(),
        }
    }

    pub fn edit(stop: &Stop) -> Self {
        Self {
            mode: EditorMode::Edit {
                original: stop.clone(),
            },
            query: String::new(),
            selected: Some(SelectedCity::from(stop)),
            arrival_text: stop.arrival.format("%Y-%m-%d").to_string(),
            days: stop.days,
            event: stop.first_event().unwrap_or_default().to_string(),
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self.mode, EditorMode::Create { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_create() {
            "Добавить город"
        } else {
            "Редактировать город"
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.is_create() {
            "Добавить город"
        } else {
            "Сохранить изменения"
        }
    }

    /// The city search is only offered while adding.
    pub fn shows_catalog(&self) -> bool {
        self.is_create()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn matches(&self) -> Vec<&'static CatalogCity> {
        catalog::search(&self.query)
    }

    pub fn select(&mut self, city: &CatalogCity) {
        if self.shows_catalog() {
            self.selected = Some(SelectedCity::from(city));
        }
    }

    /// Picks the `index`-th entry of the current matches. Returns whether a
    /// city was selected.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.matches().get(index) {
            Some(city) if self.shows_catalog() => {
                self.select(city);
                true
            }
            _ => false,
        }
    }

    pub fn is_selected(&self, city: &CatalogCity) -> bool {
        self.selected.as_ref().is_some_and(|s| s.name == city.name)
    }

    pub fn selected(&self) -> Option<&SelectedCity> {
        self.selected.as_ref()
    }

    pub fn selected_weather(&self) -> Option<Weather> {
        self.selected.as_ref().map(|s| s.weather)
    }

    /// Date, stay and event inputs unlock once a city is chosen.
    pub fn fields_enabled(&self) -> bool {
        self.selected.is_some()
    }

    pub fn arrival_text(&self) -> &str {
        &self.arrival_text
    }

    pub fn arrival(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.arrival_text.trim(), "%Y-%m-%d").ok()
    }

    pub fn set_arrival(&mut self, text: impl Into<String>) {
        if self.fields_enabled() {
            self.arrival_text = text.into();
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn days_label(&self) -> String {
        format::days_label(self.days)
    }

    pub fn increment_days(&mut self) {
        if self.fields_enabled() {
            self.days = (self.days + 1).clamp(MIN_STAY_DAYS, MAX_STAY_DAYS);
        }
    }

    pub fn decrement_days(&mut self) {
        if self.fields_enabled() {
            self.days = self.days.saturating_sub(1).clamp(MIN_STAY_DAYS, MAX_STAY_DAYS);
        }
    }

    /// Free numeric entry. Anything that is not a positive number becomes 1.
    pub fn set_days_text(&mut self, text: &str) {
        if !self.fields_enabled() {
            return;
        }
        self.days = match text.trim().parse::<u32>() {
            Ok(0) | Err(_) => MIN_STAY_DAYS,
            Ok(n) => n.min(MAX_STAY_DAYS),
        };
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn set_event(&mut self, text: impl Into<String>) {
        if self.fields_enabled() {
            self.event = text.into();
        }
    }

    pub fn can_save(&self) -> bool {
        self.selected.is_some() && self.arrival().is_some()
    }

    /// The finished stop, or `None` while the form is incomplete.
    pub fn save(&self) -> Option<Commit> {
        let city = self.selected.as_ref()?;
        let arrival = self.arrival()?;
        let events = if self.event.is_empty() {
            Vec::new()
        } else {
            vec![self.event.clone()]
        };

        let (id, transport, price_range) = match &self.mode {
            EditorMode::Create { .. } => (
                StopId::generate(),
                vec![DEFAULT_TRANSPORT.to_string()],
                Some(DEFAULT_PRICE_RANGE.to_string()),
            ),
            EditorMode::Edit { original } => (
                original.id.clone(),
                original.transport.clone(),
                original.price_range.clone(),
            ),
        };

        let stop = Stop {
            id,
            city: city.name.clone(),
            country: city.country.clone(),
            lat: city.lat,
            lng: city.lng,
            arrival,
            days: self.days,
            weather: city.weather,
            events,
            transport,
            price_range,
        };

        Some(match self.mode {
            EditorMode::Create { index } => Commit::Insert { index, stop },
            EditorMode::Edit { .. } => Commit::Replace(stop),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_by_name;

    fn paris() -> &'static CatalogCity {
        find_by_name("Париж").unwrap()
    }

    #[test]
    fn test_create_requires_city_and_date() {
        let mut editor = StopEditor::create(1, &PlannerConfig::default());
        assert!(!editor.can_save());
        assert!(editor.save().is_none());

        // Fields are locked until a city is picked.
        editor.set_arrival("2025-06-02");
        assert_eq!(editor.arrival_text(), "");

        editor.select(paris());
        assert!(!editor.can_save());

        editor.set_arrival("2025-06-02");
        assert!(editor.can_save());
    }

    #[test]
    fn test_select_index_follows_filtered_matches() {
        let mut editor = StopEditor::create(1, &PlannerConfig::default());
        editor.set_query("испан");
        assert!(!editor.select_index(1));
        assert_eq!(editor.selected_weather(), None);
        assert!(editor.select_index(0));
        assert_eq!(editor.selected().map(|c| c.name.as_str()), Some("Барселона"));
        assert_eq!(editor.selected_weather(), Some(Weather::Sunny));
    }

    #[test]
    fn test_unparsable_date_keeps_save_disabled() {
        let mut editor = StopEditor::create(1, &PlannerConfig::default());
        editor.select(paris());
        editor.set_arrival("2 июня");
        assert!(!editor.can_save());
        editor.set_arrival(" 2025-06-02 ");
        assert!(editor.can_save());
    }

    #[test]
    fn test_create_commit_defaults() {
        let mut editor = StopEditor::create(2, &PlannerConfig::default());
        editor.select(paris());
        editor.set_arrival("2025-06-02");

        let Some(Commit::Insert { index, stop }) = editor.save() else {
            panic!("expected an insert");
        };
        assert_eq!(index, 2);
        assert!(stop.id.as_str().starts_with("city-"));
        assert_eq!(stop.city, "Париж");
        assert_eq!(stop.country, "Франция");
        assert_eq!(stop.weather, Weather::Rainy);
        assert_eq!(stop.days, 3);
        assert!(stop.events.is_empty());
        assert_eq!(stop.transport, vec![DEFAULT_TRANSPORT.to_string()]);
        assert_eq!(stop.price_range.as_deref(), Some(DEFAULT_PRICE_RANGE));
    }

    #[test]
    fn test_days_clamping() {
        let mut editor = StopEditor::create(1, &PlannerConfig::default());
        editor.select(paris());

        for _ in 0..40 {
            editor.increment_days();
        }
        assert_eq!(editor.days(), 30);
        for _ in 0..40 {
            editor.decrement_days();
        }
        assert_eq!(editor.days(), 1);

        editor.set_days_text("12");
        assert_eq!(editor.days(), 12);
        editor.set_days_text("abc");
        assert_eq!(editor.days(), 1);
        editor.set_days_text("0");
        assert_eq!(editor.days(), 1);
        editor.set_days_text("-4");
        assert_eq!(editor.days(), 1);
        editor.set_days_text("99");
        assert_eq!(editor.days(), 30);
        assert_eq!(editor.days_label(), "30 дней");
    }

    #[test]
    fn test_event_is_single_label() {
        let mut editor = StopEditor::create(1, &PlannerConfig::default());
        editor.select(paris());
        editor.set_arrival("2025-06-02");
        editor.set_event("Фестиваль музыки");
        assert_eq!(editor.save().unwrap().stop().events, vec!["Фестиваль музыки"]);

        editor.set_event("");
        assert!(editor.save().unwrap().stop().events.is_empty());
    }

    #[test]
    fn test_edit_round_trip_keeps_identity() {
        let mut route = RouteStore::seeded();
        let dubai = route.get(1).unwrap().clone();

        let mut editor = StopEditor::edit(&dubai);
        assert!(!editor.shows_catalog());
        assert!(editor.can_save());
        assert_eq!(editor.arrival_text(), "2025-06-04");

        // The catalog cannot swap the city while editing.
        editor.select(paris());
        editor.increment_days();
        editor.set_event("Шопинг-фестиваль");

        let commit = editor.save().unwrap();
        assert!(matches!(commit, Commit::Replace(_)));
        commit.apply(&mut route).unwrap();

        let saved = route.get(1).unwrap();
        assert_eq!(saved.id, dubai.id);
        assert_eq!(saved.city, "Дубай");
        assert_eq!(saved.lat, dubai.lat);
        assert_eq!(saved.days, 5);
        assert_eq!(saved.price_range, dubai.price_range);
        assert_eq!(saved.events, vec!["Шопинг-фестиваль"]);
    }

    #[test]
    fn test_create_commit_applies_at_index() {
        let mut route = RouteStore::seeded();
        let mut editor = StopEditor::create(2, &PlannerConfig::default());
        editor.set_query("итал");
        let rome = editor.matches()[0];
        editor.select(rome);
        editor.set_arrival("2025-06-06");
        editor.save().unwrap().apply(&mut route).unwrap();

        let cities: Vec<&str> = route.list().iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, vec!["Москва", "Дубай", "Рим", "Москва"]);
    }

    #[test]
    fn test_labels() {
        let create = StopEditor::create(1, &PlannerConfig::default());
        assert_eq!(create.title(), "Добавить город");
        let edit = StopEditor::edit(RouteStore::seeded().get(1).unwrap());
        assert_eq!(edit.title(), "Редактировать город");
        assert_eq!(edit.save_label(), "Сохранить изменения");
    }
}
