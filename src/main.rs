mod app;
mod charts;
mod config;
mod dashboard;
mod data;
mod error;
mod message;
mod reports;
mod screens;
mod theme;

use app::App;
use clap::Parser;
use config::{Args, Config};
use iced::Settings;
use lucide_icons::LUCIDE_FONT_BYTES;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let args = Args::parse();
    init_tracing(&args.log_level);
    let config = Config::from(args);

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Distributor Inclusion Dashboard")
        .theme(App::theme)
        .settings(Settings {
            fonts: vec![LUCIDE_FONT_BYTES.into()],
            ..Default::default()
        })
        .window_size((1280.0, 900.0))
        .run()
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
