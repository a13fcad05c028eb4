#![allow(dead_code)]

use boxray_engine::core::types::*;
use boxray_engine::driver::surface::{Surface, SurfaceError};
use boxray_engine::render::barrier::PublishedImage;
use boxray_engine::render::compute::ComputePass;
use boxray_engine::render::presentation::FullscreenVertex;
use boxray_engine::render::render_opts::RenderOpts;
use boxray_engine::scene::camera::Camera;
use boxray_engine::scene::Scene;
use nonzero::nonzero;
use std::cell::Cell;

pub const SMALL_RENDER_OPTIONS: RenderOpts = RenderOpts {
    width: nonzero!(37_u32),
    height: nonzero!(21_u32),
    tile_width: nonzero!(8_u32),
    tile_height: nonzero!(8_u32),
    threads: RENDERER_THREAD_COUNT,
};

pub const RENDERER_THREAD_COUNT: usize = 4;

/// Quick and dirty renders the scene once, through the barrier
pub fn render_simple(scene: &Scene, camera: &Camera, opts: &RenderOpts) -> Image {
    let pass = ComputePass::new(opts).expect("failed creating compute pass");
    let mut image = Image::new_filled(
        opts.width.get() as usize,
        opts.height.get() as usize,
        OutputColour::OPAQUE_BLACK,
    );
    let _ = pass.dispatch(scene, camera).barrier(&mut image);
    image
}

/// A [`Surface`] that asks to close after a fixed number of presented frames,
/// and keeps a copy of everything drawn to it.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    /// Close is requested once this many frames have been presented
    pub close_after: Option<u64>,
    pub max_texture_side: u32,
    /// Fail the `n`th call to `present()` (zero-based)
    pub fail_present_at: Option<u64>,

    pub allocated: Option<Size2>,
    pub allocations: usize,
    pub drawn: Vec<Image>,
    pub triangles: Vec<[FullscreenVertex; 3]>,
    pub presented: u64,
    pub close_polls: Cell<u64>,
}

impl ScriptedSurface {
    pub fn closing_after(frames: u64) -> Self {
        Self {
            close_after: Some(frames),
            max_texture_side: 2048,
            ..Default::default()
        }
    }
}

impl Surface for ScriptedSurface {
    fn close_requested(&self) -> bool {
        self.close_polls.set(self.close_polls.get() + 1);
        self.close_after.is_some_and(|n| self.presented >= n)
    }

    fn max_texture_side(&self) -> u32 { self.max_texture_side }

    fn allocate_texture(&mut self, extent: Size2) -> Result<(), SurfaceError> {
        self.allocated = Some(extent);
        self.allocations += 1;
        Ok(())
    }

    fn draw_fullscreen(&mut self, image: PublishedImage<'_>, triangle: &[FullscreenVertex; 3]) -> Result<(), SurfaceError> {
        if self.allocated != Some(image.image().extent()) {
            return Err(SurfaceError::TextureMissing);
        }
        self.drawn.push(image.image().clone());
        self.triangles.push(*triangle);
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        if self.fail_present_at == Some(self.presented) {
            return Err(SurfaceError::Lost);
        }
        self.presented += 1;
        Ok(())
    }
}
