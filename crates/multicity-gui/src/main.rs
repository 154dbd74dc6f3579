// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

mod editor;
mod overview;
mod style;
mod timeline;

use iced::widget::{button, center, column, container, opaque, row, stack, text};
use iced::{event, keyboard, mouse, Element, Event, Length, Subscription, Task, Theme};
use log::{error, info, warn};
use multicity_core::config::PlannerConfig;
use multicity_core::editor::StopEditor;
use multicity_core::summary::{self, RouteSummary};
use multicity_core::timeline::DragSession;
use multicity_core::{RouteStore, StopId};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn main() -> iced::Result {
    iced::application("Multicity", App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .run_with(App::new)
}

#[derive(Debug, Clone)]
enum Screen {
    Constructor,
    Overview(RouteSummary),
}

#[derive(Debug, Clone)]
pub enum Message {
    // Timeline
    AddStop(usize),
    EditStop(StopId),
    DeleteStop(StopId),

    // Drag and drop
    DragStart(usize),
    DragHover(usize),
    DragEnd,
    DragCancel,

    Editor(editor::Message),

    // Overview
    ShowOverview,
    BackToConstructor,
    ConfirmSearch,
    DismissToast(u64),
}

struct App {
    config: PlannerConfig,
    route: RouteStore,
    screen: Screen,
    editor: Option<StopEditor>,
    drag: Option<DragSession>,
    toast: Option<&'static str>,
    // Bumped for every toast so a stale timer cannot hide a newer one.
    toast_generation: u64,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = PlannerConfig::load_or_default(&PlannerConfig::config_path());

        if let Err(e) = TermLogger::init(
            config.level_filter(),
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ) {
            eprintln!("Failed to initialise logging: {}", e);
        }

        let route = RouteStore::seeded();
        info!("Loaded route with {} stops", route.len());

        (
            Self {
                config,
                route,
                screen: Screen::Constructor,
                editor: None,
                drag: None,
                toast: None,
                toast_generation: 0,
            },
            Task::none(),
        )
    }

    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddStop(index) => {
                if self.drag.is_none() {
                    self.editor = Some(StopEditor::create(index, &self.config));
                }
                Task::none()
            }
            Message::EditStop(id) => {
                match self.route.find(&id) {
                    Some(stop) => self.editor = Some(StopEditor::edit(stop)),
                    None => warn!("Edit requested for unknown stop {}", id),
                }
                Task::none()
            }
            Message::DeleteStop(id) => {
                let deletable = self
                    .route
                    .position(&id)
                    .is_some_and(|i| self.route.role_of(i).can_delete());
                if deletable {
                    if let Some(stop) = self.route.remove(&id) {
                        info!("Removed {} from the route", stop.city);
                    }
                }
                Task::none()
            }
            Message::DragStart(index) => {
                if self.editor.is_none() {
                    self.drag = DragSession::begin(&self.route, index);
                }
                Task::none()
            }
            Message::DragHover(index) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.hover(&mut self.route, index);
                }
                Task::none()
            }
            Message::DragEnd => {
                if let Some(drag) = self.drag.take() {
                    drag.finish();
                }
                Task::none()
            }
            Message::DragCancel => {
                if let Some(drag) = self.drag.take() {
                    drag.cancel(&mut self.route);
                }
                Task::none()
            }
            Message::Editor(msg) => {
                let Some(state) = self.editor.as_mut() else {
                    return Task::none();
                };
                match editor::update(state, msg) {
                    editor::Action::None => {}
                    editor::Action::Commit(commit) => {
                        if let Err(e) = commit.apply(&mut self.route) {
                            error!("Failed to save stop: {}", e);
                        }
                        self.editor = None;
                    }
                    editor::Action::Close => self.editor = None,
                }
                Task::none()
            }
            Message::ShowOverview => {
                self.drag = None;
                self.screen = Screen::Overview(RouteSummary::of(self.route.list()));
                Task::none()
            }
            Message::BackToConstructor => {
                self.screen = Screen::Constructor;
                Task::none()
            }
            Message::ConfirmSearch => {
                let Screen::Overview(summary) = &self.screen else {
                    return Task::none();
                };
                let notice = summary::confirm_search(summary, self.config.toast_duration_ms);
                self.toast_generation += 1;
                self.toast = Some(notice.message);
                let generation = self.toast_generation;
                Task::perform(tokio::time::sleep(notice.duration), move |_| {
                    Message::DismissToast(generation)
                })
            }
            Message::DismissToast(generation) => {
                if generation == self.toast_generation {
                    self.toast = None;
                }
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.drag.is_none() {
            return Subscription::none();
        }
        event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::DragEnd)
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::DragCancel),
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = match &self.screen {
            Screen::Constructor => self.view_constructor(),
            Screen::Overview(summary) => overview::view(summary),
        };
        let base = container(base)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::container_page);

        let mut layers = stack![base];

        if let Some(state) = &self.editor {
            layers = layers.push(opaque(
                center(editor::view(state).map(Message::Editor)).style(style::container_backdrop),
            ));
        }

        if let Some(message) = self.toast {
            layers = layers.push(
                container(
                    container(text(message).size(15))
                        .padding([14, 20])
                        .style(style::container_toast),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24)
                .align_x(iced::alignment::Horizontal::Right)
                .align_y(iced::alignment::Vertical::Bottom),
            );
        }

        layers.into()
    }

    fn view_constructor(&self) -> Element<'_, Message> {
        let header = container(
            row![
                column![
                    text("Aviasales").size(22).color(style::palette::ACCENT_BLUE),
                    text("Конструктор сложного маршрута")
                        .size(13)
                        .color(style::palette::TEXT_SECONDARY),
                ]
                .spacing(2)
                .width(Length::Fill),
                button(text("Найти билеты").size(15))
                    .on_press(Message::ShowOverview)
                    .style(style::button_primary)
                    .padding([10, 24]),
            ]
            .align_y(iced::Alignment::Center),
        )
        .padding([12, 24])
        .width(Length::Fill)
        .style(style::container_header);

        let intro = column![
            text("Ваш маршрут").size(28),
            text("Добавляйте города, меняйте порядок и настраивайте детали поездки")
                .size(14)
                .color(style::palette::TEXT_SECONDARY),
        ]
        .spacing(6);

        column![
            header,
            container(
                column![intro, timeline::view(&self.route, self.drag.as_ref())].spacing(24)
            )
            .padding(32),
        ]
        .into()
    }
}
