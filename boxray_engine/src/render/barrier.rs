//! The hand-off between the compute pass and the presentation pass.
//!
//! [`PendingWrites`] can't be read, only published into an image with [`PendingWrites::barrier`].
//! The returned [`PublishedImage`] is the only thing the presentation pass accepts, so every frame
//! is forced through the barrier before it can be shown.

use crate::core::types::{Image, OutputColour, Size2};
use crate::core::targets::*;
use crate::render::stats::RenderStats;
use derivative::Derivative;
use getset::{CopyGetters, Getters};
use puffin::profile_function;
use tracing::trace;

/// The colours written by a single tile, for the part of it that lies inside the image
#[derive(CopyGetters, Getters, Derivative, Clone)]
#[derivative(Debug)]
pub struct TileWrites {
    /// Position of the tile's top-left pixel in the image
    #[get_copy = "pub"]
    origin: Size2,
    /// Dimensions of the tile, clipped to the image
    #[get_copy = "pub"]
    size: Size2,
    /// Row-major colours, `size.x * size.y` of them
    #[derivative(Debug = "ignore")]
    #[get = "pub"]
    texels: Vec<OutputColour>,
}

impl TileWrites {
    pub(crate) fn new(origin: Size2, size: Size2, texels: Vec<OutputColour>) -> Self {
        debug_assert_eq!(
            texels.len(),
            (size.x * size.y) as usize,
            "tile at {origin} of size {size} has wrong texel count"
        );
        Self { origin, size, texels }
    }

    /// Iterates over the pixels this tile writes, as `(image position, colour)`
    pub fn pixels(&self) -> impl Iterator<Item = (Size2, &OutputColour)> + '_ {
        let width = self.size.x as usize;
        self.texels.iter().enumerate().map(move |(i, c)| {
            let local = Size2::new((i % width) as u32, (i / width) as u32);
            (self.origin + local, c)
        })
    }
}

/// Writes staged by a dispatch of the compute pass, not yet visible in any image
#[must_use = "the compute pass output is lost unless published with `barrier()`"]
#[derive(Getters, CopyGetters, Debug)]
pub struct PendingWrites {
    #[get_copy = "pub"]
    extent: Size2,
    #[get = "pub"]
    tiles: Vec<TileWrites>,
    #[get_copy = "pub"]
    stats: RenderStats,
}

impl PendingWrites {
    pub(crate) fn new(extent: Size2, tiles: Vec<TileWrites>, stats: RenderStats) -> Self {
        Self { extent, tiles, stats }
    }

    /// Publishes every staged write into the image, and hands the image over for reading.
    ///
    /// # Panics
    /// The image must have the same dimensions the compute pass was built for.
    pub fn barrier(self, image: &mut Image) -> PublishedImage<'_> {
        profile_function!();

        assert_eq!(
            image.extent(),
            self.extent,
            "output image dimensions don't match the dispatch"
        );

        for tile in &self.tiles {
            let (x0, w) = (tile.origin.x as usize, tile.size.x as usize);
            for (row, texels) in tile.texels.chunks_exact(w).enumerate() {
                let y = tile.origin.y as usize + row;
                image.row_mut(y)[x0..x0 + w].copy_from_slice(texels);
            }
        }
        trace!(target: RENDERER, tiles = self.tiles.len(), "barrier passed");

        PublishedImage { image, stats: self.stats }
    }
}

/// An output image whose writes for this frame have all landed, and which is now read-only
#[derive(CopyGetters, Debug, Clone, Copy)]
pub struct PublishedImage<'img> {
    image: &'img Image,
    #[get_copy = "pub"]
    stats: RenderStats,
}

impl<'img> PublishedImage<'img> {
    pub fn image(&self) -> &'img Image { self.image }
}
