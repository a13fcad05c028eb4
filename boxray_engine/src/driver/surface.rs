use crate::core::types::Size2;
use crate::render::barrier::PublishedImage;
use crate::render::presentation::FullscreenVertex;
use thiserror::Error;

/// A window (or anything else) that frames can be shown on.
///
/// Creating the surface is up to the implementor, and happens before the frame driver starts.
/// Keyboard handling (e.g. closing on escape) also lives entirely on this side.
pub trait Surface {
    /// Whether the user has asked for the surface to close. Polled once per frame
    fn close_requested(&self) -> bool;

    /// The largest texture dimension the surface can display
    fn max_texture_side(&self) -> u32;

    /// Allocates the texture the output image will be uploaded to every frame.
    ///
    /// Called once, during setup. The texture must sample with nearest-neighbour filtering and no mipmaps.
    fn allocate_texture(&mut self, extent: Size2) -> Result<(), SurfaceError>;

    /// Uploads the image into the texture, and draws the triangle with it across the whole surface.
    ///
    /// Vertex positions are in surface-normalised space: `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
    fn draw_fullscreen(&mut self, image: PublishedImage<'_>, triangle: &[FullscreenVertex; 3]) -> Result<(), SurfaceError>;

    /// Swaps (or schedules a swap of) the drawn frame onto the screen, honouring the surface's vertical sync setting.
    fn present(&mut self) -> Result<(), SurfaceError>;
}

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("no output texture has been allocated on the surface")]
    TextureMissing,
    #[error("the surface was lost")]
    Lost,
}
