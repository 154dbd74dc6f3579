// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use multicity_core::catalog;
use multicity_core::config::PlannerConfig;
use multicity_core::editor::StopEditor;
use multicity_core::summary::{RouteSummary, RECOMMENDATIONS};
use multicity_core::timeline::{self, DragSession, SHORT_CONNECTION_BADGE};
use multicity_core::RouteStore;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to settings.json
    #[arg(short, long, env = "MULTICITY_CONFIG")]
    config: Option<PathBuf>,

    /// Print debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route as timeline cards
    Timeline,
    /// Show the trip overview
    Summary {
        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search the city catalog (name or country, partial match)
    Catalog { query: Option<String> },
    /// Add a catalog city to the route
    Add {
        /// City or country to search for; the first match is used
        query: String,
        /// Arrival date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Stay length in days (1-30)
        #[arg(long)]
        days: Option<String>,
        /// Insert position; defaults to just before the finish
        #[arg(long)]
        at: Option<usize>,
        /// Event you are interested in
        #[arg(long)]
        event: Option<String>,
    },
    /// Drag the stop at FROM onto position TO
    Move { from: usize, to: usize },
    /// Remove the stop at INDEX
    Remove { index: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(PlannerConfig::config_path);
    let config = PlannerConfig::load(&config_path)
        .with_context(|| format!("Failed to load settings from {:?}", config_path))?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.level_filter()
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    debug!("Settings: {:?} from {:?}", config, config_path);

    let mut route = RouteStore::seeded();

    match cli.command {
        Commands::Timeline => print_timeline(&route),
        Commands::Summary { json } => {
            let summary = RouteSummary::of(route.list());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Commands::Catalog { query } => {
            let hits = catalog::search(query.as_deref().unwrap_or_default());
            if hits.is_empty() {
                println!("No cities match '{}'", query.unwrap_or_default());
            }
            for city in hits {
                println!(
                    "{:<12} {:<16} {} ({:.4}, {:.4})",
                    city.name,
                    city.country,
                    city.weather.glyph(),
                    city.lat,
                    city.lng
                );
            }
        }
        Commands::Add {
            query,
            date,
            days,
            at,
            event,
        } => {
            let index = insert_position(at, route.len())?;
            let mut editor = StopEditor::create(index, &config);
            editor.set_query(query.as_str());
            if !editor.select_index(0) {
                bail!("No catalog city matches '{}'", query);
            }
            editor.set_arrival(date.as_str());
            if let Some(days) = days {
                editor.set_days_text(&days);
            }
            if let Some(event) = event {
                editor.set_event(event);
            }
            let Some(commit) = editor.save() else {
                bail!("Invalid arrival date '{}', expected YYYY-MM-DD", date);
            };
            println!("Adding {} at position {}", commit.stop().city, index);
            commit.apply(&mut route)?;
            print_timeline(&route);
            println!();
            print_summary(&RouteSummary::of(route.list()));
        }
        Commands::Move { from, to } => {
            let Some(mut drag) = DragSession::begin(&route, from) else {
                bail!("Stop {} cannot be moved: start and finish stay in place", from);
            };
            if !drag.hover(&mut route, to) {
                println!("Position {} does not accept the stop; order unchanged", to);
            }
            let origin = drag.origin();
            let placed = drag.finish();
            if placed != origin {
                println!("Moved stop {} to position {}", origin, placed);
            }
            print_timeline(&route);
        }
        Commands::Remove { index } => {
            if !route.role_of(index).can_delete() || index >= route.len() {
                bail!("Stop {} cannot be removed", index);
            }
            let id = route
                .get(index)
                .map(|s| s.id.clone())
                .context("No stop at that position")?;
            if let Some(removed) = route.remove(&id) {
                println!("Removed {}", removed.city);
            }
            print_timeline(&route);
        }
    }

    Ok(())
}

/// Resolves `--at` to an insert target between two existing stops; by
/// default just before the finish.
fn insert_position(at: Option<usize>, len: usize) -> Result<usize> {
    let slots = timeline::insertion_slots(len);
    let index = at.unwrap_or_else(|| len.saturating_sub(1));
    if !slots.contains(&index) {
        bail!(
            "Cannot insert at {}: start and finish stay in place (valid positions: 1..={})",
            index,
            len.saturating_sub(1)
        );
    }
    Ok(index)
}

fn print_timeline(route: &RouteStore) {
    let cards = timeline::cards(route);
    for card in &cards {
        let handle = if card.role.is_draggable() { "⋮⋮" } else { "  " };
        let badge = card
            .role
            .badge()
            .map(|b| format!(" [{}]", b))
            .unwrap_or_default();
        let warning = if card.has_warning() {
            format!(" ⚠ {}", SHORT_CONNECTION_BADGE)
        } else {
            String::new()
        };
        println!(
            "{} {}. {}{}{} ({})",
            handle,
            card.index,
            card.stop.city,
            badge,
            warning,
            card.stop.country
        );
        for line in [card.arrival_line(), card.stay_line()].into_iter().flatten() {
            println!("      {}", line);
        }
        println!("      {}", card.weather_line());
        if let Some(event) = card.event_line() {
            println!("      {}", event);
        }
        println!("      {}", card.transport_line());
        if let Some(label) = card.price_line() {
            let price = card
                .stop
                .price()
                .map(|range| range.to_string())
                .unwrap_or_else(|| label.to_string());
            println!("      Примерная стоимость: {}", price);
        }
        if card.index + 1 < cards.len() {
            println!("   (+) insert at {}", card.index + 1);
        }
    }
    if timeline::shows_drag_hint(route.len()) {
        println!("{}", timeline::DRAG_HINT);
    }
}

fn print_summary(summary: &RouteSummary) {
    println!("Общая продолжительность: {}", summary.total_days_label());
    println!("Количество перелётов:    {}", summary.flight_count);
    println!("Примерная стоимость:     {}", summary.formatted_cost());

    if summary.has_warnings() {
        println!();
        println!("Обратите внимание");
        for warning in &summary.warnings {
            println!("  • {}", warning);
        }
    }

    println!();
    println!("Детальный маршрут");
    for (i, line) in summary.stops.iter().enumerate() {
        println!("  {}. {}", line.number, line.title);
        for detail in [&line.arrival, &line.stay, &line.price].into_iter().flatten() {
            println!("     {}", detail);
        }
        let mut extras = vec![line.weather.clone()];
        extras.extend(line.event.clone());
        extras.push(line.transport.clone());
        println!("     {}", extras.join("  "));
        if let Some(leg) = summary.legs.get(i) {
            println!("     ✈ {}", leg);
        }
    }

    println!();
    println!("Рекомендации");
    for tip in RECOMMENDATIONS {
        println!("  • {}", tip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_position_defaults_before_finish() {
        assert_eq!(insert_position(None, 3).unwrap(), 2);
    }

    #[test]
    fn test_insert_position_accepts_interior_slots() {
        assert_eq!(insert_position(Some(1), 3).unwrap(), 1);
        assert_eq!(insert_position(Some(2), 3).unwrap(), 2);
    }

    #[test]
    fn test_insert_position_keeps_ends_in_place() {
        assert!(insert_position(Some(0), 3).is_err());
        assert!(insert_position(Some(3), 3).is_err());
        assert!(insert_position(Some(10), 3).is_err());
        assert!(insert_position(None, 1).is_err());
    }
}
