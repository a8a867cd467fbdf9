//! Command line configuration.

use clap::{Parser, ValueEnum};
use iced::Theme;

use crate::data::DataSource;

pub const DEFAULT_STUDIO: &str = "Universal Pictures";

#[derive(Debug, Parser)]
#[command(name = "distributor-dashboard")]
#[command(about = "Diversity and inclusion dashboard for film distributors", long_about = None)]
pub struct Args {
    /// Dataset location: a JSON file path or an http(s) URL.
    #[arg(long, env = "DASHBOARD_DATA", default_value = "data.json")]
    pub data: String,

    /// Distributor selected once the data is loaded.
    #[arg(long, default_value = DEFAULT_STUDIO)]
    pub default_studio: String,

    /// Text shown for metrics missing from a record.
    #[arg(long, default_value = "N/A")]
    pub placeholder: String,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    pub theme: ThemeChoice,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

/// Settings the application needs once logging is up.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: DataSource,
    pub default_studio: String,
    pub placeholder: String,
    pub theme: ThemeChoice,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            source: DataSource::parse(&args.data),
            default_studio: args.default_studio,
            placeholder: args.placeholder,
            theme: args.theme,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DataSource::parse("data.json"),
            default_studio: DEFAULT_STUDIO.to_owned(),
            placeholder: "N/A".to_owned(),
            theme: ThemeChoice::Light,
        }
    }
}
