// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use chrono::NaiveDate;
use multicity_core::stop::PLACEHOLDER_PRICE;
use multicity_core::summary::{RouteSummary, Warning};
use multicity_core::{RouteStore, Stop, StopId, Weather};

fn stop(city: &str, days: u32, price: Option<&str>) -> Stop {
    Stop {
        id: StopId::new(city),
        city: city.to_string(),
        country: "Test".to_string(),
        lat: 0.0,
        lng: 0.0,
        arrival: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        days,
        weather: Weather::Sunny,
        events: vec![],
        transport: vec!["✈️".to_string()],
        price_range: price.map(str::to_string),
    }
}

#[test]
fn test_cost_from_two_price_ranges() {
    let stops = vec![
        stop("A", 0, Some(PLACEHOLDER_PRICE)),
        stop("B", 3, Some("20 000 – 35 000 ₽")),
        stop("C", 0, Some("18 000 – 28 000 ₽")),
    ];
    let summary = RouteSummary::of(&stops);
    assert_eq!(summary.estimated_cost, 27_500 + 23_000);
    assert_eq!(summary.formatted_cost(), "51 000 ₽");
}

#[test]
fn test_unreadable_prices_contribute_nothing() {
    let stops = vec![
        stop("A", 0, None),
        stop("B", 2, Some("по запросу")),
        stop("C", 2, Some("от 40 000 ₽")),
        stop("D", 0, Some("10 000 – 20 000 ₽")),
    ];
    let summary = RouteSummary::of(&stops);
    assert_eq!(summary.estimated_cost, 15_000);
}

#[test]
fn test_short_connection_only_for_interior_stops() {
    let interior = vec![stop("A", 2, None), stop("B", 0, None), stop("C", 2, None)];
    let summary = RouteSummary::of(&interior);
    assert_eq!(
        summary.warnings,
        vec![Warning::ShortConnection {
            city: "B".to_string()
        }]
    );
    assert_eq!(summary.warnings[0].to_string(), "Короткая стыковка в B");

    let at_start = vec![stop("B", 0, None), stop("A", 2, None), stop("C", 2, None)];
    assert!(RouteSummary::of(&at_start).warnings.is_empty());

    let at_end = vec![stop("A", 2, None), stop("C", 2, None), stop("B", 0, None)];
    assert!(RouteSummary::of(&at_end).warnings.is_empty());
}

#[test]
fn test_totals_follow_route_changes() {
    let mut route = RouteStore::seeded();
    route
        .insert(1, stop("Рим", 3, Some("15 000 – 30 000 ₽")))
        .unwrap();

    let summary = RouteSummary::of(route.list());
    assert_eq!(summary.total_days, 7);
    assert_eq!(summary.flight_count, 3);
    assert_eq!(summary.estimated_cost, 50_500 + 22_500);
    assert_eq!(summary.formatted_cost(), "73 000 ₽");
    assert_eq!(summary.total_days_label(), "7 дней");
}

#[test]
fn test_oversized_price_label_is_ignored() {
    let mut route = RouteStore::seeded();
    let mut dubai = route.get(1).unwrap().clone();
    dubai.price_range = Some("99999999999999999 000 – 99999999999999999 000 ₽".to_string());
    assert!(route.update(dubai));

    let summary = RouteSummary::of(route.list());
    assert_eq!(summary.estimated_cost, 23_000);
    assert_eq!(summary.formatted_cost(), "23 000 ₽");
}

#[test]
fn test_cost_and_days_saturate() {
    let huge = "18446744073709551 000 – 18446744073709551 000 ₽";
    let stops = vec![
        stop("A", u32::MAX, Some(huge)),
        stop("B", 5, Some(huge)),
        stop("C", 0, None),
    ];
    let summary = RouteSummary::of(&stops);
    assert_eq!(summary.estimated_cost, u64::MAX);
    assert_eq!(summary.total_days, u32::MAX);
}
