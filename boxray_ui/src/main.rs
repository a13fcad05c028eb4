use crate::app::BoxrayAppUninit;
use crate::backend::eframe::EframeBackend;
use crate::backend::{UiBackend, WindowOpts};
use crate::cli::Args;
use crate::definitions::targets::*;
use anyhow::Context;
use clap::Parser;
use tracing::info;

mod app;
mod backend;
mod cli;
mod definitions;
mod ext;
mod logging;
mod profiler;
mod surface;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_level.into())?;
    info!(target: MAIN, version = env!("CARGO_PKG_VERSION"), "starting boxray");

    let _profiler_server = args.profile.then(profiler::start_server).transpose()?;

    let render_opts = args.render_opts();
    let present_opts = args.present_opts();
    let (exit_tx, exit_rx) = flume::unbounded();

    let backend = EframeBackend {
        window: WindowOpts {
            title: args.title.clone(),
            inner_size: [render_opts.width.get() as f32, render_opts.height.get() as f32],
            vsync: present_opts.vsync(),
        },
    };
    let app = BoxrayAppUninit {
        render_opts,
        present_opts,
        exit_tx,
    };
    let run = backend.run_init("boxray", app);

    // Errors from inside the app are more specific than whatever eframe reports for them
    if let Ok(err) = exit_rx.try_recv() {
        return Err(err);
    }
    run.context("failed to run the window")?;

    info!(target: MAIN, "exiting");
    Ok(())
}
