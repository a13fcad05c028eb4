use crate::core::types::Size2;
use crate::render::ResourceCompileError;
use getset::CopyGetters;
use itertools::iproduct;

/// A 2D grid of fixed-size tiles covering an image.
///
/// The grid is `ceil(extent / tile)` tiles on each axis, so it can overshoot the image by up to
/// `tile - 1` invocations per axis. Those invocations must be skipped, see [`Self::in_bounds`].
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq, Eq)]
#[getset(get_copy = "pub")]
pub struct DispatchGrid {
    /// The dimensions of the image being covered
    extent: Size2,
    /// The dimensions of a single tile (work group)
    tile: Size2,
    /// How many tiles there are along each axis
    groups: Size2,
}

impl DispatchGrid {
    pub fn new(extent: Size2, tile: Size2) -> Result<Self, ResourceCompileError> {
        let overflow = || ResourceCompileError::DispatchOverflow { extent, tile };

        if extent.cmpeq(Size2::ZERO).any() || tile.cmpeq(Size2::ZERO).any() {
            return Err(overflow());
        }

        let groups = Size2::new(extent.x.div_ceil(tile.x), extent.y.div_ceil(tile.y));
        // The last invocation of the last group must still have a representable ID
        groups
            .x
            .checked_mul(tile.x)
            .zip(groups.y.checked_mul(tile.y))
            .ok_or_else(overflow)?;

        Ok(Self { extent, tile, groups })
    }

    /// The total number of tiles in the grid
    pub fn group_count(&self) -> usize { self.groups.x as usize * self.groups.y as usize }

    /// The total number of invocations, including those that overshoot the image
    pub fn invocation_count(&self) -> usize {
        self.group_count() * self.tile.x as usize * self.tile.y as usize
    }

    /// IDs of every group in the grid, row by row
    pub fn group_ids(&self) -> impl Iterator<Item = Size2> {
        iproduct!(0..self.groups.y, 0..self.groups.x).map(|(y, x)| Size2::new(x, y))
    }

    /// The global ID of the first invocation in a group
    pub fn group_origin(&self, group: Size2) -> Size2 { group * self.tile }

    /// Global IDs of every invocation in a group, row by row, including any outside the image
    pub fn invocation_ids(&self, group: Size2) -> impl Iterator<Item = Size2> {
        let origin = self.group_origin(group);
        iproduct!(0..self.tile.y, 0..self.tile.x).map(move |(y, x)| origin + Size2::new(x, y))
    }

    /// The part of a group that lies inside the image, as `(origin, size)`
    pub fn group_bounds(&self, group: Size2) -> (Size2, Size2) {
        let origin = self.group_origin(group);
        let size = (self.extent - origin).min(self.tile);
        (origin, size)
    }

    /// Whether an invocation maps onto a pixel of the image
    pub fn in_bounds(&self, id: Size2) -> bool { id.cmplt(self.extent).all() }
}
