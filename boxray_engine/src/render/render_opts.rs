use crate::core::types::Size2;
use nonzero::nonzero;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU32, NonZeroU64};
use valuable::Valuable;

/// Options for the compute pass
#[derive(Copy, Clone, Debug, PartialEq, Eq, Valuable, Serialize, Deserialize)]
pub struct RenderOpts {
    /// The dimensions of the output image
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    /// The dimensions of a single tile of the dispatch grid
    pub tile_width: NonZeroU32,
    pub tile_height: NonZeroU32,
    /// How many worker threads to render with. Zero picks one per logical CPU
    pub threads: usize,
}

impl RenderOpts {
    /// The dimensions of the output image as `(width, height)`
    pub fn extent(&self) -> Size2 { Size2::new(self.width.get(), self.height.get()) }

    /// The dimensions of a tile as `(width, height)`
    pub fn tile(&self) -> Size2 { Size2::new(self.tile_width.get(), self.tile_height.get()) }
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            width: nonzero!(800_u32),
            height: nonzero!(800_u32),
            tile_width: nonzero!(8_u32),
            tile_height: nonzero!(8_u32),
            threads: 0,
        }
    }
}

/// Options for how frames are shown
#[derive(Copy, Clone, Debug, PartialEq, Eq, Valuable, Serialize, Deserialize)]
pub struct PresentOpts {
    /// How many vertical blanks to wait for per swap. Zero disables vertical sync
    pub swap_interval: u32,
    /// Aggregate frame statistics are logged once every this many frames
    pub stats_log_interval: NonZeroU64,
}

impl PresentOpts {
    pub fn vsync(&self) -> bool { self.swap_interval > 0 }
}

impl Default for PresentOpts {
    fn default() -> Self {
        Self {
            swap_interval: 1,
            stats_log_interval: nonzero!(120_u64),
        }
    }
}
