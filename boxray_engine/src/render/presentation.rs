use crate::core::targets::*;
use crate::core::types::{Image, OutputColour, Point2, Size2};
use crate::driver::surface::{Surface, SurfaceError};
use crate::render::barrier::PublishedImage;
use crate::render::ResourceCompileError;
use getset::CopyGetters;
use puffin::profile_function;
use tracing::debug;

/// A vertex of the fullscreen triangle, in surface-normalised space (`0..1` across the surface, y down)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FullscreenVertex {
    pub pos: Point2,
    /// Texture coordinate. Always equal to [`Self::pos`]
    pub uv: Point2,
}

/// The `index`th vertex of the fullscreen triangle: `(0, 0)`, `(2, 0)`, `(0, 2)`.
///
/// The triangle's hypotenuse runs through `(1, 1)`, so it covers the whole unit square with a single primitive.
pub fn fullscreen_vertex(index: u32) -> FullscreenVertex {
    let pos = Point2::new(((index & 1) << 1) as f32, (index & 2) as f32);
    FullscreenVertex { pos, uv: pos }
}

pub fn fullscreen_triangle() -> [FullscreenVertex; 3] { [0, 1, 2].map(fullscreen_vertex) }

/// Paints the output image over the whole surface, with nearest-neighbour sampling
#[derive(CopyGetters, Debug)]
pub struct PresentationPass {
    /// Dimensions of the texture the image is uploaded into
    #[get_copy = "pub"]
    extent: Size2,
    triangle: [FullscreenVertex; 3],
}

impl PresentationPass {
    /// Checks the surface can hold the image as a texture, and allocates that texture once up front
    pub fn new(surface: &mut impl Surface, extent: Size2) -> Result<Self, ResourceCompileError> {
        let max_side = surface.max_texture_side();
        if extent.max_element() > max_side {
            return Err(ResourceCompileError::TextureTooLarge { extent, max_side });
        }

        surface
            .allocate_texture(extent)
            .map_err(|source| ResourceCompileError::TextureAllocation { source })?;
        debug!(target: PRESENT, %extent, max_side, "presentation pass ready");

        Ok(Self {
            extent,
            triangle: fullscreen_triangle(),
        })
    }

    pub fn draw(&self, surface: &mut impl Surface, image: PublishedImage<'_>) -> Result<(), SurfaceError> {
        profile_function!();
        debug_assert_eq!(image.image().extent(), self.extent, "image doesn't match texture");

        surface.draw_fullscreen(image, &self.triangle)
    }

    /// Maps the centre of a surface pixel to a texture coordinate in `0..=1`
    pub fn surface_uv(pixel: Size2, surface: Size2) -> Point2 { (pixel.as_vec2() + 0.5) / surface.as_vec2() }

    /// Samples the image at a texture coordinate, the same way the surface's sampler does:
    /// no filtering, no mipmaps, coordinates clamped to the edge.
    ///
    /// The texel is `floor(uv * size)`.
    pub fn sample_nearest(image: &Image, uv: Point2) -> OutputColour {
        let size = image.extent().as_vec2();
        let texel = (uv * size).floor().clamp(Point2::ZERO, size - 1.);
        image[(texel.x as usize, texel.y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::ColourRgba;
    use itertools::iproduct;

    #[test]
    fn triangle_vertices() {
        let [a, b, c] = fullscreen_triangle();
        assert_eq!(a.pos, Point2::new(0., 0.));
        assert_eq!(b.pos, Point2::new(2., 0.));
        assert_eq!(c.pos, Point2::new(0., 2.));
        assert!([a, b, c].iter().all(|v| v.pos == v.uv));
    }

    #[test]
    fn triangle_covers_unit_square() {
        // Inside iff `x >= 0`, `y >= 0` and `x + y <= 2`
        for (x, y) in iproduct!(0..=10, 0..=10) {
            let p = Point2::new(x as f32, y as f32) / 10.;
            assert!(p.x >= 0. && p.y >= 0. && p.x + p.y <= 2., "{p} not covered");
        }
    }

    #[test]
    fn nearest_sampling_returns_exact_texels() {
        let image = Image::from_fn(4, 3, |x, y| ColourRgba::new([x as f32 / 4., y as f32 / 3., 0.5, 1.]));

        // One surface pixel per texel reproduces the image exactly
        let surface = image.extent();
        for (x, y, px) in image.enumerate_pixels() {
            let uv = PresentationPass::surface_uv(Size2::new(x as u32, y as u32), surface);
            assert_eq!(PresentationPass::sample_nearest(&image, uv).to_bits(), px.to_bits());
        }

        // A larger surface magnifies without blending
        let surface = Size2::new(8, 6);
        let uv = PresentationPass::surface_uv(Size2::new(3, 5), surface);
        assert_eq!(PresentationPass::sample_nearest(&image, uv), image[(1, 2)]);
    }

    #[test]
    fn sampling_clamps_to_edge() {
        let image = Image::from_fn(2, 2, |x, y| ColourRgba::new([x as f32, y as f32, 0., 1.]));
        assert_eq!(PresentationPass::sample_nearest(&image, Point2::new(1., 1.)), image[(1, 1)]);
        assert_eq!(PresentationPass::sample_nearest(&image, Point2::new(-0.5, 2.)), image[(0, 1)]);
    }
}
