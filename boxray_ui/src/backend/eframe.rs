use crate::backend::{App, UiBackend, UninitApp, WindowOpts};
use crate::definitions::targets::*;
use boxray_engine::driver::frame_driver::InitializationError;
use egui::ViewportBuilder;
use std::error::Error;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EframeBackend {
    pub window: WindowOpts,
}

impl UiBackend for EframeBackend {
    fn run_init<Uninit: UninitApp>(self, app_name: &str, app: Uninit) -> Result<(), InitializationError> {
        let WindowOpts { title, inner_size, vsync } = self.window;
        debug!(target: UI, app_name, %title, ?inner_size, vsync, "creating eframe window");

        eframe::run_native(
            app_name,
            eframe::NativeOptions {
                run_and_return: true,
                viewport: ViewportBuilder::default()
                    .with_title(title)
                    .with_inner_size(inner_size)
                    .with_resizable(true)
                    .with_app_id(app_name),
                vsync,
                centered: true,

                ..Default::default()
            },
            // This closure is called by `eframe` to initialise the app, once the window and GL context exist
            Box::new(
                move |cc: &eframe::CreationContext| -> Result<Box<dyn eframe::App>, Box<dyn Error + Send + Sync>> {
                    let max_texture_side = max_texture_side(cc);
                    debug!(target: UI, max_texture_side, "queried graphics limits");
                    let app = app.init(&cc.egui_ctx, max_texture_side)?;
                    Ok(Box::new(EframeApp(app)))
                },
            ),
        )
        .map_err(|err| InitializationError::SurfaceCreation {
            reason: format!("eframe failed: {err}"),
        })
    }
}

/// The largest texture the GL context can hold.
///
/// egui only learns the real limit once the first frame starts, so during app creation it has to
/// come from the GL context itself
fn max_texture_side(cc: &eframe::CreationContext) -> u32 {
    use eframe::glow::HasContext as _;

    let gl_side = cc
        .gl
        .as_ref()
        .map(|gl| unsafe { gl.get_parameter_i32(eframe::glow::MAX_TEXTURE_SIZE) })
        .and_then(|side| u32::try_from(side).ok())
        .filter(|&side| side > 0);

    gl_side.unwrap_or_else(|| {
        let fallback = cc.egui_ctx.input(|i| i.max_texture_side);
        u32::try_from(fallback).unwrap_or(u32::MAX)
    })
}

struct EframeApp<A: App>(A);

impl<A: App> eframe::App for EframeApp<A> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) { self.0.on_update(ctx); }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) { self.0.on_shutdown(); }
}
