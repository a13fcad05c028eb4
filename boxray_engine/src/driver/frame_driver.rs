use crate::core::targets::*;
use crate::core::types::Image;
use crate::core::colour::ColourRgba;
use crate::driver::surface::{Surface, SurfaceError};
use crate::render::compute::ComputePass;
use crate::render::presentation::PresentationPass;
use crate::render::render_opts::{PresentOpts, RenderOpts};
use crate::render::stats::RenderStats;
use crate::render::ResourceCompileError;
use crate::scene::camera::Camera;
use crate::scene::preset::PresetScene;
use crate::scene::Scene;
use getset::CopyGetters;
use puffin::profile_function;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, trace};

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
pub enum FrameState {
    /// Nothing has been set up yet
    Uninitialized,
    /// Frames are being rendered and shown
    Running,
    /// A close was requested, and resources are being released
    Closing,
    /// Everything has been released. Terminal
    Closed,
}

/// What happened during a call to [`FrameDriver::run_frame`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// A new frame was rendered and presented
    Presented,
    /// The driver has shut down, and won't present anything else
    Closed,
}

/// The surface or graphics capabilities could not be created
#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("failed to create the window surface: {reason}")]
    SurfaceCreation { reason: String },
    #[error("frame driver was already initialised (state: {state})")]
    AlreadyInitialised { state: FrameState },
}

/// Anything that can go wrong before the driver reaches [`FrameState::Running`]
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Initialization(#[from] InitializationError),
    #[error(transparent)]
    ResourceCompile(#[from] ResourceCompileError),
}

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("can't run a frame while the driver is {state}")]
    NotRunning { state: FrameState },
    #[error("failed to draw frame {frame}")]
    Draw {
        frame: u64,
        #[source]
        source: SurfaceError,
    },
    #[error("failed to present frame {frame}")]
    Present {
        frame: u64,
        #[source]
        source: SurfaceError,
    },
}

/// Everything the driver owns while running
#[derive(Debug)]
struct FrameResources {
    scene: Scene,
    camera: Camera,
    image: Image,
    compute: ComputePass,
    presentation: PresentationPass,
}

/// Running totals between two statistics log lines
#[derive(Copy, Clone, Debug, Default)]
struct StatsWindow {
    frames: u32,
    compute: Duration,
    frame: Duration,
}

/// Drives the render loop: each frame is compute, barrier, presentation, then present.
///
/// The driver never blocks by itself; the caller decides when to run the next frame
/// (usually once the surface's swap returns).
#[derive(CopyGetters, Debug)]
pub struct FrameDriver {
    #[get_copy = "pub"]
    state: FrameState,
    #[get_copy = "pub"]
    present_opts: PresentOpts,
    /// How many frames have been presented so far
    #[get_copy = "pub"]
    frame_count: u64,
    window: StatsWindow,
    resources: Option<FrameResources>,
}

impl FrameDriver {
    pub fn new(present_opts: PresentOpts) -> Self {
        Self {
            state: FrameState::Uninitialized,
            present_opts,
            frame_count: 0,
            window: StatsWindow::default(),
            resources: None,
        }
    }

    /// Builds the output image and both passes, moving the driver into [`FrameState::Running`].
    ///
    /// The surface must already exist.
    pub fn initialise(
        &mut self,
        surface: &mut impl Surface,
        preset: PresetScene,
        render_opts: &RenderOpts,
    ) -> Result<(), SetupError> {
        profile_function!();

        if self.state != FrameState::Uninitialized {
            return Err(InitializationError::AlreadyInitialised { state: self.state }.into());
        }

        info!(target: DRIVER, scene = preset.name, boxes = preset.scene.len(), ?render_opts, "initialising frame driver");

        let compute = ComputePass::new(render_opts)?;
        let presentation = PresentationPass::new(surface, render_opts.extent())?;
        let image = Image::new_filled(
            render_opts.width.get() as usize,
            render_opts.height.get() as usize,
            ColourRgba::OPAQUE_BLACK,
        );

        self.resources = Some(FrameResources {
            scene: preset.scene,
            camera: preset.camera,
            image,
            compute,
            presentation,
        });
        self.state = FrameState::Running;
        info!(target: DRIVER, present_opts = ?self.present_opts, "frame driver running");

        Ok(())
    }

    /// Runs a single frame.
    ///
    /// The close flag is checked first; if set, the driver shuts down instead of rendering.
    /// Once closed, every further call returns [`FrameStatus::Closed`].
    pub fn run_frame(&mut self, surface: &mut impl Surface) -> Result<FrameStatus, FrameError> {
        profile_function!();

        let res = match (self.state, self.resources.as_mut()) {
            (FrameState::Running, Some(res)) => res,
            (FrameState::Closing | FrameState::Closed, _) => return Ok(FrameStatus::Closed),
            (state, _) => return Err(FrameError::NotRunning { state }),
        };

        if surface.close_requested() {
            info!(target: DRIVER, frame = self.frame_count, "close requested");
            self.shutdown();
            return Ok(FrameStatus::Closed);
        }

        let frame = self.frame_count;
        let start = Instant::now();

        let pending = res.compute.dispatch(&res.scene, &res.camera);
        let published = pending.barrier(&mut res.image);
        let stats = published.stats();
        res.presentation
            .draw(surface, published)
            .map_err(|source| FrameError::Draw { frame, source })?;
        surface
            .present()
            .map_err(|source| FrameError::Present { frame, source })?;

        self.frame_count += 1;
        self.record_stats(stats, start.elapsed());

        Ok(FrameStatus::Presented)
    }

    /// Runs frames until the surface asks to close, returning how many frames were presented
    pub fn run(&mut self, surface: &mut impl Surface) -> Result<u64, FrameError> {
        while self.run_frame(surface)? == FrameStatus::Presented {}
        Ok(self.frame_count)
    }

    /// Releases everything the driver owns. Safe to call in any state
    pub fn shutdown(&mut self) {
        if self.state == FrameState::Closed {
            return;
        }

        self.state = FrameState::Closing;
        debug!(target: DRIVER, "releasing frame resources");
        self.resources = None;

        self.state = FrameState::Closed;
        info!(target: DRIVER, frames = self.frame_count, "frame driver closed");
    }

    /// The output image, as of the last barrier. Only available while running
    pub fn output_image(&self) -> Option<&Image> { self.resources.as_ref().map(|r| &r.image) }

    fn record_stats(&mut self, stats: RenderStats, frame_time: Duration) {
        trace!(target: DRIVER, frame = self.frame_count, ?stats, ?frame_time, "frame presented");

        self.window.frames += 1;
        self.window.compute += stats.duration;
        self.window.frame += frame_time;

        if u64::from(self.window.frames) >= self.present_opts.stats_log_interval.get() {
            let n = self.window.frames;
            info!(
                target: DRIVER,
                frames = self.frame_count,
                avg_compute = ?(self.window.compute / n),
                avg_frame = ?(self.window.frame / n),
                px = stats.num_px,
                tiles = stats.num_tiles,
                threads = stats.num_threads,
                "frame statistics"
            );
            self.window = StatsWindow::default();
        }
    }
}
