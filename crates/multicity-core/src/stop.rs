// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::price::PriceRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Price label meaning "no estimate available".
pub const PLACEHOLDER_PRICE: &str = "—";
/// Price label given to stops created through the editor.
pub const DEFAULT_PRICE_RANGE: &str = "15 000 – 30 000 ₽";
pub const DEFAULT_TRANSPORT: &str = "✈️";

static LAST_GENERATED: AtomicI64 = AtomicI64::new(0);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Time-derived id of the form `city-<millis>`.
    ///
    /// Two calls in the same millisecond still yield distinct, increasing ids.
    pub fn generate() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = LAST_GENERATED.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_GENERATED.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(format!("city-{}", next)),
                Err(actual) => last = actual,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Rainy,
    Cold,
}

impl Weather {
    pub fn glyph(self) -> &'static str {
        match self {
            Weather::Sunny => "☀️",
            Weather::Rainy => "🌧",
            Weather::Cold => "❄️",
        }
    }

    /// Label used on timeline cards and in the editor preview.
    pub fn label(self) -> &'static str {
        match self {
            Weather::Sunny => "Тепло и солнечно",
            Weather::Rainy => "Возможны осадки",
            Weather::Cold => "Прохладно",
        }
    }

    /// Compact label for the overview list.
    pub fn short_label(self) -> &'static str {
        match self {
            Weather::Sunny => "Тепло",
            Weather::Rainy => "Осадки",
            Weather::Cold => "Прохладно",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub arrival: NaiveDate,
    pub days: u32,
    pub weather: Weather,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub transport: Vec<String>,
    #[serde(default)]
    pub price_range: Option<String>,
}

impl Stop {
    /// Price label worth showing, i.e. present and not the placeholder.
    pub fn visible_price(&self) -> Option<&str> {
        self.price_range
            .as_deref()
            .filter(|label| *label != PLACEHOLDER_PRICE)
    }

    /// Structured price, if the label can be interpreted.
    pub fn price(&self) -> Option<PriceRange> {
        self.visible_price().and_then(PriceRange::from_label)
    }

    pub fn first_event(&self) -> Option<&str> {
        self.events.first().map(String::as_str)
    }

    pub fn transport_glyphs(&self) -> String {
        self.transport.join(" ")
    }
}
