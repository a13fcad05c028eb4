use crate::definitions::targets::*;
use crate::ext::img_ext::ImageExt as _;
use boxray_engine::core::types::Size2;
use boxray_engine::driver::surface::{Surface, SurfaceError};
use boxray_engine::render::barrier::PublishedImage;
use boxray_engine::render::presentation::FullscreenVertex;
use egui::epaint::{Mesh, Vertex};
use egui::{Color32, ColorImage, Context, Key, LayerId, Pos2, Shape, TextureHandle, TextureOptions};
use puffin::profile_function;
use tracing::{debug, trace};

/// A [`Surface`] backed by an egui window.
///
/// The output image lives in a single egui texture, which is painted as a textured mesh on the
/// background layer. eframe swaps buffers itself once the frame's update returns.
pub struct EguiSurface {
    ctx: Context,
    /// Queried from the graphics context when the window was created
    max_texture_side: u32,
    texture: Option<TextureHandle>,
}

impl EguiSurface {
    pub fn new(ctx: Context, max_texture_side: u32) -> Self {
        Self {
            ctx,
            max_texture_side,
            texture: None,
        }
    }
}

impl Surface for EguiSurface {
    /// Closing the window, or releasing escape
    fn close_requested(&self) -> bool {
        self.ctx.input(|i| {
            let escape = i.key_released(Key::Escape);
            if escape {
                trace!(target: SURFACE, "escape released");
            }
            i.viewport().close_requested() || escape
        })
    }

    fn max_texture_side(&self) -> u32 { self.max_texture_side }

    fn allocate_texture(&mut self, extent: Size2) -> Result<(), SurfaceError> {
        debug!(target: SURFACE, %extent, "allocating output texture");
        let blank = ColorImage::new([extent.x as usize, extent.y as usize], Color32::BLACK);
        self.texture = Some(self.ctx.load_texture("boxray::output_image", blank, TextureOptions::NEAREST));
        Ok(())
    }

    fn draw_fullscreen(&mut self, image: PublishedImage<'_>, triangle: &[FullscreenVertex; 3]) -> Result<(), SurfaceError> {
        profile_function!();

        let texture = self.texture.as_mut().ok_or(SurfaceError::TextureMissing)?;
        texture.set(image.image().to_egui(), TextureOptions::NEAREST);

        let screen = self.ctx.screen_rect();
        let mut mesh = Mesh::with_texture(texture.id());
        for v in triangle {
            mesh.vertices.push(Vertex {
                pos: screen.min + egui::vec2(v.pos.x, v.pos.y) * screen.size(),
                uv: Pos2::new(v.uv.x, v.uv.y),
                color: Color32::WHITE,
            });
        }
        mesh.indices.extend([0, 1, 2]);

        self.ctx.layer_painter(LayerId::background()).add(Shape::mesh(mesh));
        Ok(())
    }

    /// eframe swaps after `update` returns, with the window's vsync setting. All that's needed here
    /// is to ask for the next frame straight away
    fn present(&mut self) -> Result<(), SurfaceError> {
        self.ctx.request_repaint();
        Ok(())
    }
}
