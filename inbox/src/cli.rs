use std::{fmt, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value_t = LogLevel::Info,
        global = true
    )]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print conversations in inbox order
    Rank {
        /// JSON file with `channels`, `directs` and optional `pinned`
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Tab to show: all, unread, groups, dms or pinned. Anything else shows all
        #[arg(short, long, value_name = "FILTER")]
        filter: Option<String>,

        /// Pin key such as "channel-1" or "direct-3", replaces the pins in FILE
        #[arg(short, long = "pin", value_name = "KEY")]
        pins: Vec<String>,

        #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the filter tabs with their counts
    Tabs {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pin key, replaces the pins in FILE
        #[arg(short, long = "pin", value_name = "KEY")]
        pins: Vec<String>,

        #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Generate shell completions
    Completions {
        #[arg(long)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}
