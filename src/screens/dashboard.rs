use iced::widget::canvas::Canvas;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Fill, Length};

use crate::app::LoadStatus;
use crate::dashboard::{ChartSlot, Dashboard, Metrics};
use crate::message::Message;
use crate::reports::ChartInstance;

const CHART_HEIGHT: f32 = 320.0;

pub fn view<'a>(dashboard: &'a Dashboard, status: &'a LoadStatus) -> Element<'a, Message> {
    let heading = dashboard.selection().unwrap_or("Distributor Inclusion Dashboard");
    let mut content = column![text(heading).size(28)].spacing(24);

    match status {
        LoadStatus::Loading => {
            content = content.push(text("Loading distributor data...").size(14));
        }
        LoadStatus::Failed(message) => {
            content = content.push(text(format!("Could not load data: {message}")).size(14));
        }
        LoadStatus::Ready if dashboard.store().is_empty() => {
            content = content.push(text("No distributors data available.").size(14));
        }
        LoadStatus::Ready => {}
    }

    content = content.push(metrics_row(dashboard.metrics()));

    let mut slots = dashboard.slots().iter();
    while let Some(first) = slots.next() {
        let mut pair = row![chart_section(first, dashboard.selection())].spacing(24);
        if let Some(second) = slots.next() {
            pair = pair.push(chart_section(second, dashboard.selection()));
        }
        content = content.push(pair);
    }

    scrollable(container(content).padding(24)).height(Fill).into()
}

fn metrics_row<'a>(metrics: &'a Metrics) -> Element<'a, Message> {
    let cards = metrics
        .entries()
        .into_iter()
        .map(|(label, value)| -> Element<'a, Message> {
            container(column![text(label).size(14), text(value).size(30)].spacing(6))
                .padding(16)
                .width(Fill)
                .style(|theme| iced::widget::container::bordered_box(theme))
                .into()
        });

    row(cards).spacing(16).into()
}

fn chart_section<'a>(slot: &'a ChartSlot, studio: Option<&'a str>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match slot.instance() {
        Some(ChartInstance::Line(chart)) => Canvas::new(chart).width(Fill).height(CHART_HEIGHT).into(),
        Some(ChartInstance::Bar(chart)) => Canvas::new(chart).width(Fill).height(CHART_HEIGHT).into(),
        Some(ChartInstance::Pie(chart)) => Canvas::new(chart).width(Fill).height(CHART_HEIGHT).into(),
        None => {
            let message = match studio {
                Some(studio) => format!("No {} data available for {studio}", slot.kind().field()),
                None => "No distributor selected.".to_owned(),
            };
            container(text(message).size(14))
                .center_x(Fill)
                .center_y(Length::Fixed(CHART_HEIGHT))
                .into()
        }
    };

    container(body)
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}
