use std::sync::Arc;

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};
use lucide_icons::iced::{icon_film, icon_panel_left_close, icon_panel_left_open};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::dashboard::{Dashboard, SidebarEntry};
use crate::data::DataStore;
use crate::message::Message;
use crate::theme::{
    accent_button_style, studio_button_style, studio_label_color, DRAWER_BG, DRAWER_TEXT_ACTIVE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

pub struct App {
    config: Config,
    theme: Theme,
    dashboard: Dashboard,
    status: LoadStatus,
    sidebar_collapsed: bool,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let source = config.source.clone();
        info!(%source, "Loading distributor data");

        (
            Self {
                theme: config.theme.theme(),
                dashboard: Dashboard::new(config.placeholder.clone()),
                status: LoadStatus::Loading,
                sidebar_collapsed: false,
                config,
            },
            Task::perform(source.load(), |result| {
                Message::DataLoaded(result.map_err(Arc::new))
            }),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::DataLoaded(Ok(store)) => {
                info!(studios = store.len(), "Distributor data loaded");
                self.finish_loading(store, LoadStatus::Ready);
                Task::none()
            }
            Message::DataLoaded(Err(err)) => {
                error!(error = %err, "Error loading distributor data");
                self.finish_loading(DataStore::default(), LoadStatus::Failed(err.to_string()));
                Task::none()
            }
            Message::SelectStudio(studio) => {
                self.dashboard.select(&studio);
                Task::none()
            }
        }
    }

    fn finish_loading(&mut self, store: DataStore, status: LoadStatus) {
        self.dashboard.install(store);
        self.status = status;

        let studio = &self.config.default_studio;
        if !self.dashboard.select(studio) {
            debug!(studio = %studio, "Default distributor not in dataset");
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let sidebar = self.sidebar_view();
        let content = crate::screens::dashboard::view(&self.dashboard, &self.status);

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };

        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(accent_button_style);

        let header: Element<'a, Message> = if self.sidebar_collapsed {
            toggle.into()
        } else {
            row![
                toggle,
                icon_film().size(18).style(|_| iced::widget::text::Style {
                    color: Some(DRAWER_TEXT_ACTIVE),
                }),
                text("Distributors").style(|_| iced::widget::text::Style {
                    color: Some(DRAWER_TEXT_ACTIVE),
                }),
            ]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
        };

        let studios = self.dashboard.sidebar().map(|entry| self.sidebar_button(entry));

        let content = column![header, Space::new().height(Length::Fixed(12.0))]
            .push(scrollable(column(studios).spacing(6)).height(Length::Fill))
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(72.0)
            } else {
                Length::Fixed(260.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, entry: SidebarEntry<'a>) -> Element<'a, Message> {
        let selected = entry.active;
        let label = if self.sidebar_collapsed {
            initials(entry.name)
        } else {
            entry.name.to_owned()
        };

        let label_text = text(label).style(move |_| iced::widget::text::Style {
            color: Some(studio_label_color(selected)),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                label_text,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![label_text].align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::SelectStudio(entry.name.to_owned()))
            .width(Length::Fill)
            .style(studio_button_style(selected))
            .padding(8)
            .into()
    }
}

/// Up to three leading letters of a studio name, shown when the sidebar is
/// collapsed.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(3)
        .collect();

    if letters.is_empty() {
        name.chars().take(2).collect()
    } else {
        letters.to_uppercase()
    }
}
