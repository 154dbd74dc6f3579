// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::style;
use crate::Message;
use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Column, Space};
use iced::{mouse, Alignment, Element, Length};
use multicity_core::timeline::{self, DragSession, TimelineCard, SHORT_CONNECTION_BADGE};
use multicity_core::RouteStore;

const CARD_WIDTH: f32 = 280.0;

pub fn view<'a>(route: &'a RouteStore, drag: Option<&DragSession>) -> Element<'a, Message> {
    let cards = timeline::cards(route);
    let dragging = drag.map(DragSession::current);

    let mut strip = row![].spacing(16).align_y(Alignment::Center);
    for card in cards {
        let index = card.index;
        strip = strip.push(view_card(card, dragging == Some(index)));
        if index + 1 < route.len() {
            strip = strip.push(insert_slot(index + 1));
        }
    }

    let mut content: Column<'a, Message> = column![scrollable(container(strip).padding([16, 0]))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
        ))
        .width(Length::Fill)]
    .spacing(12);

    if timeline::shows_drag_hint(route.len()) {
        content = content.push(
            container(
                text(timeline::DRAG_HINT)
                    .size(13)
                    .color(style::palette::TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
        );
    }

    content.into()
}

fn insert_slot<'a>(target: usize) -> Element<'a, Message> {
    let line = || {
        container(Space::new(Length::Fixed(48.0), Length::Fixed(2.0)))
            .style(|_| iced::widget::container::Style {
                background: Some(iced::Background::Color(style::palette::BORDER)),
                ..Default::default()
            })
    };

    column![
        line(),
        button(
            text("+")
                .size(20)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
        )
            .width(40)
            .height(40)
            .on_press(Message::AddStop(target))
            .style(style::button_insert),
        line(),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

fn view_card<'a>(card: TimelineCard<'a>, is_dragging: bool) -> Element<'a, Message> {
    let role = card.role;
    let stop = card.stop;

    let mut title_row = row![text(stop.city.as_str()).size(18)]
        .spacing(8)
        .align_y(Alignment::Center);
    if let Some(badge) = role.badge() {
        title_row = title_row.push(
            container(text(badge).size(11))
                .padding([2, 8])
                .style(style::container_role_badge),
        );
    }

    let mut heading = row![];
    if role.is_draggable() {
        heading = heading.push(text("⋮⋮").size(18).color(style::palette::TEXT_SECONDARY));
    }
    heading = heading.push(
        column![
            title_row,
            text(stop.country.as_str())
                .size(13)
                .color(style::palette::TEXT_SECONDARY),
        ]
        .spacing(2)
        .width(Length::Fill),
    );

    let mut controls = row![].spacing(4);
    if role.can_edit() {
        controls = controls.push(
            button(text("✎").size(14))
                .on_press(Message::EditStop(stop.id.clone()))
                .style(style::button_ghost)
                .padding(6),
        );
    }
    if role.can_delete() {
        controls = controls.push(
            button(text("🗑").size(14))
                .on_press(Message::DeleteStop(stop.id.clone()))
                .style(style::button_danger_ghost)
                .padding(6),
        );
    }
    heading = heading.push(controls).spacing(8);

    let schedule: Column<'a, Message> = column(
        [card.arrival_line(), card.stay_line()]
            .into_iter()
            .flatten()
            .map(|line| text(line).size(13).into()),
    )
    .spacing(4);

    let mut details = column![text(card.weather_line()).size(13)].spacing(6);
    if let Some(event) = card.event_line() {
        details = details.push(text(event).size(13));
    }
    details = details.push(
        text(card.transport_line())
            .size(13)
            .color(style::palette::TEXT_SECONDARY),
    );

    let mut body = column![heading, schedule, details].spacing(12).padding(16);
    if let Some(price) = card.price_line() {
        body = body.push(column![
            text("Примерная стоимость")
                .size(11)
                .color(style::palette::TEXT_SECONDARY),
            text(price).size(13).color(style::palette::ACCENT_BLUE),
        ]);
    }

    let mut framed = column![].align_x(Alignment::Center);
    if card.has_warning() {
        framed = framed.push(
            container(text(format!("⚠ {}", SHORT_CONNECTION_BADGE)).size(11))
                .padding([3, 10])
                .style(style::container_warning_badge),
        );
    }
    framed = framed.push(
        container(body)
            .width(Length::Fixed(CARD_WIDTH))
            .style(if is_dragging {
                style::container_card_dragging
            } else {
                style::container_card
            }),
    );

    if role.is_draggable() {
        let index = card.index;
        mouse_area(framed)
            .on_press(Message::DragStart(index))
            .on_enter(Message::DragHover(index))
            .interaction(mouse::Interaction::Grab)
            .into()
    } else {
        framed.into()
    }
}
