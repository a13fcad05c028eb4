use boxray_engine::render::render_opts::{PresentOpts, RenderOpts};
use clap::{Parser, ValueEnum};
use std::num::NonZeroU32;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
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
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "boxray", version)]
#[command(about = "Ray casts a room of boxes in real time, one ray per pixel")]
pub struct Args {
    /// Output image width in pixels. The window opens at this size
    #[arg(long, default_value = "800")]
    pub width: NonZeroU32,

    /// Output image height in pixels. The window opens at this size
    #[arg(long, default_value = "800")]
    pub height: NonZeroU32,

    /// Side length of the square tiles the image is rendered in
    #[arg(long, default_value = "8")]
    pub tile_size: NonZeroU32,

    /// Worker threads for rendering, `0` uses one per logical CPU
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Vertical blanks to wait for per frame, `0` disables vsync
    #[arg(long, default_value_t = 1)]
    pub swap_interval: u32,

    /// Window title
    #[arg(long, default_value = "boxray")]
    pub title: String,

    /// Log level, overridden per-target by `RUST_LOG`
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Serve profiling data to `puffin_viewer`
    #[arg(long)]
    pub profile: bool,
}

impl Args {
    pub fn render_opts(&self) -> RenderOpts {
        RenderOpts {
            width: self.width,
            height: self.height,
            tile_width: self.tile_size,
            tile_height: self.tile_size,
            threads: self.threads,
        }
    }

    pub fn present_opts(&self) -> PresentOpts {
        PresentOpts {
            swap_interval: self.swap_interval,
            ..PresentOpts::default()
        }
    }
}
