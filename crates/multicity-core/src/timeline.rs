// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

//! Card layout and drag-reorder rules for the route timeline.
//!
//! The first and last stops are the trip's departure and return points. They
//! are never draggable and never accept a drop, so a drag can only move stops
//! among the interior positions `1..=len-2`.

use crate::format;
use crate::route::RouteStore;
use crate::stop::Stop;
use log::debug;

pub const DRAG_HINT: &str = "💡 Перетаскивайте карточки, чтобы изменить порядок посещения городов";
pub const SHORT_CONNECTION_BADGE: &str = "Короткая стыковка";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRole {
    Start,
    Interior,
    Finish,
    /// A lone stop that is both departure and return.
    RoundTrip,
}

impl PositionRole {
    pub fn of(index: usize, len: usize) -> Self {
        let first = index == 0;
        let last = index + 1 == len;
        match (first, last) {
            (true, true) => PositionRole::RoundTrip,
            (true, false) => PositionRole::Start,
            (false, true) => PositionRole::Finish,
            (false, false) => PositionRole::Interior,
        }
    }

    pub fn is_interior(self) -> bool {
        self == PositionRole::Interior
    }

    /// Interior cards are both drag handles and drop targets.
    pub fn is_draggable(self) -> bool {
        self.is_interior()
    }

    pub fn can_edit(self) -> bool {
        matches!(self, PositionRole::Interior | PositionRole::Finish)
    }

    pub fn can_delete(self) -> bool {
        self.is_interior()
    }

    pub fn shows_arrival(self) -> bool {
        self.can_edit()
    }

    pub fn badge(self) -> Option<&'static str> {
        match self {
            PositionRole::Start => Some("Старт"),
            PositionRole::Finish => Some("Финиш"),
            PositionRole::RoundTrip => Some("Туда-обратно"),
            PositionRole::Interior => None,
        }
    }
}

/// Everything a view needs to draw one stop card.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineCard<'a> {
    pub index: usize,
    pub role: PositionRole,
    pub stop: &'a Stop,
}

impl<'a> TimelineCard<'a> {
    /// Stays shorter than a day between two flights.
    pub fn has_warning(&self) -> bool {
        self.role.is_interior() && self.stop.days < 1
    }

    pub fn arrival_line(&self) -> Option<String> {
        self.role
            .shows_arrival()
            .then(|| format!("Прибытие: {}", format::day_month(self.stop.arrival)))
    }

    pub fn stay_line(&self) -> Option<String> {
        (self.stop.days > 0).then(|| {
            format!(
                "Продолжительность: {}",
                format::days_label(self.stop.days)
            )
        })
    }

    pub fn weather_line(&self) -> String {
        format!(
            "{} {}",
            self.stop.weather.glyph(),
            self.stop.weather.label()
        )
    }

    pub fn event_line(&self) -> Option<String> {
        self.stop.first_event().map(|event| format!("🎉 {}", event))
    }

    pub fn transport_line(&self) -> String {
        format!("{} Доступный транспорт", self.stop.transport_glyphs())
    }

    pub fn price_line(&self) -> Option<&'a str> {
        self.stop.visible_price()
    }
}

pub fn cards(route: &RouteStore) -> Vec<TimelineCard<'_>> {
    let len = route.len();
    route
        .list()
        .iter()
        .enumerate()
        .map(|(index, stop)| TimelineCard {
            index,
            role: PositionRole::of(index, len),
            stop,
        })
        .collect()
}

/// Insert targets for the gaps between consecutive stops: `1..len`.
pub fn insertion_slots(len: usize) -> Vec<usize> {
    (1..len).collect()
}

pub fn shows_drag_hint(len: usize) -> bool {
    len > 2
}

/// Moves the element at `from` to `to`, shifting the ones in between.
pub fn reindex(sequence: &[Stop], from: usize, to: usize) -> Vec<Stop> {
    let mut out = sequence.to_vec();
    if from >= out.len() || to >= out.len() {
        return out;
    }
    let dragged = out.remove(from);
    out.insert(to, dragged);
    out
}

/// One drag gesture on the timeline.
///
/// The route is reordered live on every hover crossing. `finish` keeps the
/// result, `cancel` puts the pre-drag order back.
#[derive(Debug, Clone)]
pub struct DragSession {
    origin: usize,
    current: usize,
    snapshot: Vec<Stop>,
}

impl DragSession {
    /// Starts dragging the card at `source`; `None` for the first and last
    /// cards.
    pub fn begin(route: &RouteStore, source: usize) -> Option<Self> {
        if !route.role_of(source).is_draggable() || source >= route.len() {
            return None;
        }
        debug!("Drag started at {}", source);
        Some(Self {
            origin: source,
            current: source,
            snapshot: route.list().to_vec(),
        })
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Index the dragged stop currently occupies.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Hovering the dragged card over `target`. Returns whether the route
    /// changed.
    pub fn hover(&mut self, route: &mut RouteStore, target: usize) -> bool {
        if target == self.current
            || target >= route.len()
            || !route.role_of(target).is_draggable()
        {
            return false;
        }
        let sequence = reindex(route.list(), self.current, target);
        route.reorder(sequence);
        debug!("Drag moved {} -> {}", self.current, target);
        self.current = target;
        true
    }

    pub fn finish(self) -> usize {
        debug!("Drag finished: {} -> {}", self.origin, self.current);
        self.current
    }

    pub fn cancel(self, route: &mut RouteStore) {
        debug!("Drag cancelled, restoring order");
        if self.current != self.origin {
            route.reorder(self.snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stop::{StopId, Weather};
    use chrono::NaiveDate;

    fn route_of(cities: &[&str]) -> RouteStore {
        RouteStore::new(
            cities
                .iter()
                .map(|city| Stop {
                    id: StopId::new(*city),
                    city: city.to_string(),
                    country: String::new(),
                    lat: 0.0,
                    lng: 0.0,
                    arrival: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                    days: 1,
                    weather: Weather::Sunny,
                    events: vec![],
                    transport: vec![],
                    price_range: None,
                })
                .collect(),
        )
    }

    fn order(route: &RouteStore) -> Vec<&str> {
        route.list().iter().map(|s| s.city.as_str()).collect()
    }

    #[test]
    fn test_roles() {
        assert_eq!(PositionRole::of(0, 1), PositionRole::RoundTrip);
        assert_eq!(PositionRole::of(0, 3), PositionRole::Start);
        assert_eq!(PositionRole::of(1, 3), PositionRole::Interior);
        assert_eq!(PositionRole::of(2, 3), PositionRole::Finish);

        assert!(!PositionRole::Start.can_edit());
        assert!(PositionRole::Finish.can_edit());
        assert!(!PositionRole::Finish.can_delete());
        assert!(PositionRole::Interior.can_delete());
        assert!(!PositionRole::RoundTrip.is_draggable());
        assert_eq!(PositionRole::RoundTrip.badge(), Some("Туда-обратно"));
    }

    #[test]
    fn test_slots_between_cards() {
        assert_eq!(insertion_slots(3), vec![1, 2]);
        assert_eq!(insertion_slots(1), Vec::<usize>::new());
        assert!(insertion_slots(0).is_empty());
    }

    #[test]
    fn test_roles_follow_length_changes() {
        let mut route = route_of(&["A", "B", "C"]);
        assert_eq!(route.role_of(2), PositionRole::Finish);
        route.insert(2, route.get(1).unwrap().clone()).unwrap();
        assert_eq!(route.role_of(2), PositionRole::Interior);
        assert_eq!(route.role_of(3), PositionRole::Finish);
    }

    #[test]
    fn test_reindex() {
        let route = route_of(&["A", "B", "C", "D", "E"]);
        let moved = reindex(route.list(), 1, 3);
        let cities: Vec<&str> = moved.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, vec!["A", "C", "D", "B", "E"]);
    }

    #[test]
    fn test_ends_cannot_be_dragged() {
        let route = route_of(&["A", "B", "C", "D"]);
        assert!(DragSession::begin(&route, 0).is_none());
        assert!(DragSession::begin(&route, 3).is_none());
        assert!(DragSession::begin(&route, 9).is_none());
        assert!(DragSession::begin(&route, 1).is_some());
    }

    #[test]
    fn test_live_reorder_on_hover() {
        let mut route = route_of(&["A", "B", "C", "D", "E"]);
        let mut drag = DragSession::begin(&route, 1).unwrap();

        assert!(drag.hover(&mut route, 2));
        assert_eq!(order(&route), vec!["A", "C", "B", "D", "E"]);
        assert!(drag.hover(&mut route, 3));
        assert_eq!(order(&route), vec!["A", "C", "D", "B", "E"]);
        assert_eq!(drag.origin(), 1);
        assert_eq!(drag.current(), 3);

        // Hovering the card's own slot changes nothing.
        assert!(!drag.hover(&mut route, 3));
        assert_eq!(drag.finish(), 3);
        assert_eq!(order(&route), vec!["A", "C", "D", "B", "E"]);
    }

    #[test]
    fn test_hover_on_ends_is_blocked() {
        let mut route = route_of(&["A", "B", "C", "D"]);
        let mut drag = DragSession::begin(&route, 2).unwrap();

        assert!(!drag.hover(&mut route, 0));
        assert!(!drag.hover(&mut route, 3));
        assert_eq!(order(&route), vec!["A", "B", "C", "D"]);

        assert!(drag.hover(&mut route, 1));
        assert_eq!(order(&route), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_cancel_restores_order() {
        let mut route = route_of(&["A", "B", "C", "D", "E"]);
        let mut drag = DragSession::begin(&route, 3).unwrap();
        drag.hover(&mut route, 1);
        assert_eq!(order(&route), vec!["A", "D", "B", "C", "E"]);

        drag.cancel(&mut route);
        assert_eq!(order(&route), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_card_lines() {
        let route = RouteStore::seeded();
        let cards = cards(&route);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].arrival_line(), None);
        assert_eq!(cards[0].stay_line(), None);
        assert_eq!(cards[0].price_line(), None);

        assert_eq!(cards[1].arrival_line().unwrap(), "Прибытие: 4 июня");
        assert_eq!(
            cards[1].stay_line().unwrap(),
            "Продолжительность: 4 дня"
        );
        assert_eq!(cards[1].price_line(), Some("20 000 – 35 000 ₽"));
        assert_eq!(cards[2].arrival_line().unwrap(), "Прибытие: 8 июня");
    }

    #[test]
    fn test_warning_only_on_interior_zero_day_stops() {
        let mut route = route_of(&["A", "B", "C"]);
        let mut b = route.get(1).unwrap().clone();
        b.days = 0;
        route.update(b);
        let mut a = route.get(0).unwrap().clone();
        a.days = 0;
        route.update(a);

        let flags: Vec<bool> = cards(&route).iter().map(|c| c.has_warning()).collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
