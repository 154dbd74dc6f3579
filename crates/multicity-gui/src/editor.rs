// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::style;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length};
use multicity_core::catalog;
use multicity_core::editor::{Commit, StopEditor};

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Select(&'static str),
    ArrivalChanged(String),
    DaysChanged(String),
    IncrementDays,
    DecrementDays,
    EventChanged(String),
    Save,
    Cancel,
}

/// What the editor asks its owner to do after handling a message.
#[derive(Debug)]
pub enum Action {
    None,
    Commit(Commit),
    Close,
}

pub fn update(editor: &mut StopEditor, message: Message) -> Action {
    match message {
        Message::QueryChanged(query) => editor.set_query(query),
        Message::Select(name) => {
            if let Some(city) = catalog::find_by_name(name) {
                editor.select(city);
            }
        }
        Message::ArrivalChanged(value) => editor.set_arrival(value),
        Message::DaysChanged(value) => editor.set_days_text(&value),
        Message::IncrementDays => editor.increment_days(),
        Message::DecrementDays => editor.decrement_days(),
        Message::EventChanged(value) => editor.set_event(value),
        Message::Save => {
            // Save stays disabled until the form is complete.
            return match editor.save() {
                Some(commit) => Action::Commit(commit),
                None => Action::None,
            };
        }
        Message::Cancel => return Action::Close,
    }
    Action::None
}

pub fn view(editor: &StopEditor) -> Element<'_, Message> {
    let header = row![
        text(editor.title()).size(24).width(Length::Fill),
        button(text("✕").size(18))
            .on_press(Message::Cancel)
            .style(style::button_ghost)
            .padding(8),
    ]
    .align_y(Alignment::Center);

    let mut body = column![].spacing(20);

    if editor.shows_catalog() {
        body = body.push(view_catalog(editor));
    }

    if let Some(city) = editor.selected() {
        body = body.push(
            container(
                column![
                    text(format!("📍 {}", city.name)).size(18),
                    text(city.country.as_str())
                        .size(13)
                        .color(style::palette::TEXT_SECONDARY),
                ]
                .spacing(4),
            )
            .padding(16)
            .width(Length::Fill)
            .style(style::container_info_panel),
        );
        body = body.push(view_fields(editor));
    }

    if let Some(weather) = editor.selected_weather() {
        body = body.push(
            container(
                row![
                    text(weather.glyph()).size(28),
                    column![
                        text("Ожидаемая погода")
                            .size(12)
                            .color(style::palette::TEXT_SECONDARY),
                        text(weather.label()).size(15),
                    ]
                    .spacing(2),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
            .padding(16)
            .width(Length::Fill)
            .style(style::container_panel),
        );
    }

    let save = button(
        text(editor.save_label())
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press_maybe(editor.can_save().then_some(Message::Save))
    .style(style::button_primary)
    .padding([12, 24])
    .width(Length::Fill);

    let footer = row![
        button(
            text("Отмена")
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
        )
        .on_press(Message::Cancel)
        .style(style::button_secondary)
        .padding([12, 24])
        .width(Length::Fill),
        save,
    ]
    .spacing(12);

    container(
        column![
            header,
            scrollable(body).height(Length::Shrink),
            footer
        ]
        .spacing(24)
        .padding(24),
    )
    .width(Length::Fixed(640.0))
    .max_height(720.0)
    .style(style::container_modal)
    .into()
}

fn view_catalog(editor: &StopEditor) -> Element<'_, Message> {
    let search = text_input("Поиск города...", editor.query())
        .on_input(Message::QueryChanged)
        .padding(12);

    let matches = editor.matches();
    let mut grid: Column<'_, Message> = column![].spacing(10);
    for pair in matches.chunks(2) {
        let mut line = row![].spacing(10);
        for &city in pair {
            line = line.push(
                button(
                    column![
                        text(format!("📍 {}", city.name)).size(15),
                        text(city.country)
                            .size(12)
                            .color(style::palette::TEXT_SECONDARY),
                    ]
                    .spacing(2),
                )
                .on_press(Message::Select(city.name))
                .style(style::button_catalog(editor.is_selected(city)))
                .padding(14)
                .width(Length::FillPortion(1)),
            );
        }
        if pair.len() == 1 {
            line = line.push(iced::widget::Space::with_width(Length::FillPortion(1)));
        }
        grid = grid.push(line);
    }
    if matches.is_empty() {
        grid = grid.push(
            text("Ничего не найдено")
                .size(13)
                .color(style::palette::TEXT_SECONDARY),
        );
    }

    column![
        text("Выберите город").size(13),
        search,
        scrollable(grid).height(Length::Fixed(256.0)),
    ]
    .spacing(10)
    .into()
}

fn view_fields(editor: &StopEditor) -> Element<'_, Message> {
    let arrival = column![
        text("Дата прибытия").size(13),
        text_input("ГГГГ-ММ-ДД", editor.arrival_text())
            .on_input(Message::ArrivalChanged)
            .padding(12),
    ]
    .spacing(8);

    let days = column![
        text("Продолжительность пребывания (дней)").size(13),
        row![
            button(text("−").size(16))
                .on_press(Message::DecrementDays)
                .style(style::button_secondary)
                .padding([8, 14]),
            text_input("1", &editor.days().to_string())
                .on_input(Message::DaysChanged)
                .padding(12)
                .width(Length::Fixed(80.0)),
            button(text("+").size(16))
                .on_press(Message::IncrementDays)
                .style(style::button_secondary)
                .padding([8, 14]),
            text(editor.days_label())
                .size(13)
                .color(style::palette::TEXT_SECONDARY),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    let event = column![
        text("Интересующие события (опционально)").size(13),
        text_input("Например: Фестиваль музыки", editor.event())
            .on_input(Message::EventChanged)
            .padding(12),
    ]
    .spacing(8);

    column![arrival, days, event].spacing(20).into()
}
