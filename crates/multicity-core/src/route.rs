// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::stop::{Stop, StopId, Weather, DEFAULT_TRANSPORT, PLACEHOLDER_PRICE};
use crate::timeline::PositionRole;
use crate::PlannerError;
use chrono::NaiveDate;
use log::{debug, warn};

/// Owner of the ordered list of stops.
///
/// Every mutation happens through `&mut self`, so a caller always observes a
/// fully applied change.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStore {
    stops: Vec<Stop>,
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl RouteStore {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Moscow → Dubai → Moscow, the route a fresh session starts with.
    pub fn seeded() -> Self {
        let moscow = |id: &str, arrival: NaiveDate, price: &str| Stop {
            id: StopId::new(id),
            city: "Москва".to_string(),
            country: "Россия".to_string(),
            lat: 55.7558,
            lng: 37.6173,
            arrival,
            days: 0,
            weather: Weather::Sunny,
            events: Vec::new(),
            transport: vec![DEFAULT_TRANSPORT.to_string()],
            price_range: Some(price.to_string()),
        };
        let date = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap_or_default();

        Self::new(vec![
            moscow("1", date(1), PLACEHOLDER_PRICE),
            Stop {
                id: StopId::new("3"),
                city: "Дубай".to_string(),
                country: "ОАЭ".to_string(),
                lat: 25.2048,
                lng: 55.2708,
                arrival: date(4),
                days: 4,
                weather: Weather::Sunny,
                events: Vec::new(),
                transport: vec![DEFAULT_TRANSPORT.to_string()],
                price_range: Some("20 000 – 35 000 ₽".to_string()),
            },
            moscow("4", date(8), "18 000 – 28 000 ₽"),
        ])
    }

    /// Inserts `stop` at `index`, shifting later stops right.
    ///
    /// Ids are not checked for uniqueness.
    pub fn insert(&mut self, index: usize, stop: Stop) -> Result<(), PlannerError> {
        let len = self.stops.len();
        if index > len {
            warn!("Rejected insert of {} at {} (route has {} stops)", stop.id, index, len);
            return Err(PlannerError::IndexOutOfBounds { index, len });
        }
        debug!("Inserting {} ({}) at {}", stop.id, stop.city, index);
        self.stops.insert(index, stop);
        Ok(())
    }

    /// Replaces the stop carrying the same id. Returns `false` and leaves the
    /// route untouched when no stop matches.
    pub fn update(&mut self, stop: Stop) -> bool {
        match self.stops.iter_mut().find(|s| s.id == stop.id) {
            Some(slot) => {
                debug!("Updating {} ({})", stop.id, stop.city);
                *slot = stop;
                true
            }
            None => {
                debug!("Update ignored: no stop with id {}", stop.id);
                false
            }
        }
    }

    /// Removes the first stop with `id`; missing ids are ignored.
    pub fn remove(&mut self, id: &StopId) -> Option<Stop> {
        let index = self.position(id)?;
        let removed = self.stops.remove(index);
        debug!("Removed {} ({}) from {}", removed.id, removed.city, index);
        Some(removed)
    }

    /// Replaces the sequence wholesale. The caller is trusted to pass a
    /// permutation of the current stops.
    pub fn reorder(&mut self, sequence: Vec<Stop>) {
        debug!("Reordering route ({} stops)", sequence.len());
        self.stops = sequence;
    }

    pub fn list(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    pub fn find(&self, id: &StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| &s.id == id)
    }

    pub fn position(&self, id: &StopId) -> Option<usize> {
        self.stops.iter().position(|s| &s.id == id)
    }

    pub fn role_of(&self, index: usize) -> PositionRole {
        PositionRole::of(index, self.stops.len())
    }
}
