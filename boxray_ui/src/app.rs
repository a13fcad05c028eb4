use crate::backend::{App, UninitApp};
use crate::definitions::targets::*;
use crate::surface::EguiSurface;
use anyhow::anyhow;
use boxray_engine::driver::frame_driver::{FrameDriver, FrameStatus};
use boxray_engine::render::render_opts::{PresentOpts, RenderOpts};
use boxray_engine::scene::preset;
use egui::{Context, ViewportCommand};
use puffin::profile_function;
use tracing::{error, info};

/// Everything needed to start the app, before the window exists
pub struct BoxrayAppUninit {
    pub render_opts: RenderOpts,
    pub present_opts: PresentOpts,
    /// Fatal errors are sent here, to be reported once the window has closed
    pub exit_tx: flume::Sender<anyhow::Error>,
}

pub struct BoxrayApp {
    driver: FrameDriver,
    surface: EguiSurface,
    exit_tx: flume::Sender<anyhow::Error>,
}

impl UninitApp for BoxrayAppUninit {
    type InitApp = BoxrayApp;

    fn init(self, ctx: &Context, max_texture_side: u32) -> anyhow::Result<Self::InitApp> {
        info!(target: MAIN, max_texture_side, "ui app init");

        let mut surface = EguiSurface::new(ctx.clone(), max_texture_side);
        let mut driver = FrameDriver::new(self.present_opts);
        if let Err(err) = driver.initialise(&mut surface, preset::table_room(), &self.render_opts) {
            error!(target: MAIN, ?err, "failed to set up the frame driver");
            // The receiver is only dropped once `main` has returned
            let _ = self.exit_tx.send(anyhow::Error::new(err).context("failed to set up the frame driver"));
            return Err(anyhow!("frame driver setup failed"));
        }

        Ok(BoxrayApp {
            driver,
            surface,
            exit_tx: self.exit_tx,
        })
    }
}

impl App for BoxrayApp {
    fn on_update(&mut self, ctx: &Context) {
        puffin::GlobalProfiler::lock().new_frame();
        profile_function!();

        match self.driver.run_frame(&mut self.surface) {
            Ok(FrameStatus::Presented) => {}
            Ok(FrameStatus::Closed) => ctx.send_viewport_cmd(ViewportCommand::Close),
            Err(err) => {
                error!(target: MAIN, ?err, "frame failed");
                let _ = self.exit_tx.send(anyhow::Error::new(err).context("frame loop failed"));
                self.driver.shutdown();
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }
    }

    fn on_shutdown(&mut self) {
        self.driver.shutdown();
        info!(target: MAIN, frames = self.driver.frame_count(), "ui app shutdown");
    }
}
