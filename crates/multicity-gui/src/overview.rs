// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::style;
use crate::Message;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};
use multicity_core::summary::{RouteSummary, StopLine, RECOMMENDATIONS};

pub fn view(summary: &RouteSummary) -> Element<'_, Message> {
    let header = container(
        button(text("← Вернуться к конструктору").size(14))
            .on_press(Message::BackToConstructor)
            .style(style::button_ghost)
            .padding([8, 12]),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(style::container_header);

    let intro = column![
        text("Обзор маршрута").size(30),
        text("Проверьте детали вашего путешествия перед поиском билетов")
            .size(14)
            .color(style::palette::TEXT_SECONDARY),
    ]
    .spacing(6);

    let stats = row![
        stat_tile("📅", "Общая продолжительность", summary.total_days_label()),
        stat_tile("✈", "Количество перелётов", summary.flight_count.to_string()),
        stat_tile("🕑", "Примерная стоимость", summary.formatted_cost()),
    ]
    .spacing(24);

    let mut page = column![intro, stats].spacing(28);

    if summary.has_warnings() {
        let items = column(
            summary
                .warnings
                .iter()
                .map(|w| text(format!("• {}", w)).size(13).into()),
        )
        .spacing(4);
        page = page.push(
            container(
                column![text("⚠ Обратите внимание").size(15), items].spacing(8),
            )
            .padding(16)
            .width(Length::Fill)
            .style(style::container_warning_panel),
        );
    }

    let mut itinerary: Column<'_, Message> = column![text("Детальный маршрут").size(20)].spacing(20);
    for (i, line) in summary.stops.iter().enumerate() {
        itinerary = itinerary.push(stop_row(line));
        if let Some(leg) = summary.legs.get(i) {
            itinerary = itinerary.push(
                container(
                    text(format!("✈ {}", leg))
                        .size(13)
                        .color(style::palette::TEXT_SECONDARY),
                )
                .padding([4, 52]),
            );
        }
    }
    page = page.push(
        container(itinerary)
            .padding(24)
            .width(Length::Fill)
            .style(style::container_panel),
    );

    let tips = column(
        RECOMMENDATIONS
            .iter()
            .map(|tip| text(format!("• {}", tip)).size(13).into()),
    )
    .spacing(4);
    page = page.push(
        container(column![text("✔ Рекомендации").size(15), tips].spacing(8))
            .padding(24)
            .width(Length::Fill)
            .style(style::container_info_panel),
    );

    page = page.push(
        container(
            row![
                button(text("Изменить маршрут").size(15))
                    .on_press(Message::BackToConstructor)
                    .style(style::button_secondary)
                    .padding([14, 32]),
                button(text("Найти билеты").size(17))
                    .on_press(Message::ConfirmSearch)
                    .style(style::button_primary)
                    .padding([14, 48]),
            ]
            .spacing(16),
        )
        .center_x(Length::Fill),
    );

    column![
        header,
        scrollable(container(page).padding(32).max_width(1200)).height(Length::Fill),
    ]
    .into()
}

fn stat_tile<'a>(icon: &'a str, label: &'a str, value: String) -> Element<'a, Message> {
    container(
        row![
            text(icon).size(26),
            column![
                text(label).size(13).color(style::palette::TEXT_SECONDARY),
                text(value).size(24),
            ]
            .spacing(4),
        ]
        .spacing(14)
        .align_y(Alignment::Center),
    )
    .padding(24)
    .width(Length::FillPortion(1))
    .style(style::container_panel)
    .into()
}

fn stop_row(line: &StopLine) -> Element<'_, Message> {
    let badge = container(text(line.number.to_string()).size(16))
        .center(Length::Fixed(40.0))
        .style(style::container_role_badge);

    let mut schedule = column![text(line.title.as_str()).size(18)].spacing(4);
    for detail in [&line.arrival, &line.stay].into_iter().flatten() {
        schedule = schedule.push(
            text(detail.as_str())
                .size(13)
                .color(style::palette::TEXT_SECONDARY),
        );
    }

    let mut top: Row<'_, Message> = row![schedule.width(Length::Fill)];
    if let Some(price) = &line.price {
        top = top.push(
            text(price.as_str())
                .size(13)
                .color(style::palette::ACCENT_BLUE),
        );
    }

    let mut extras = row![text(line.weather.as_str()).size(13)].spacing(16);
    if let Some(event) = &line.event {
        extras = extras.push(text(event.as_str()).size(13));
    }
    extras = extras.push(text(line.transport.as_str()).size(13));

    row![badge, column![top, extras].spacing(10).width(Length::Fill)]
        .spacing(16)
        .into()
}
