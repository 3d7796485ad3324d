use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen_demo")]
#[command(about = "Real-time single-sphere ray tracing demo")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Number of frames to render
    #[arg(short, long, default_value_t = 160)]
    pub frames: u32,

    /// Worker threads (defaults to one per hardware thread)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = 32)]
    pub bucket_size: u32,

    /// Yaw added to the camera every frame, in degrees
    #[arg(long, default_value_t = 0.0)]
    pub spin: f32,

    /// Distance walked forward every frame (horizontal plane only)
    #[arg(long, default_value_t = 0.0)]
    pub walk: f32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
