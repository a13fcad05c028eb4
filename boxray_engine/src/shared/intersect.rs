use crate::core::types::Number;

/// The parametric interval along a ray that lies inside a box, as returned by the slab test
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlabSpan {
    /// Where the ray enters the box. Negative if the ray starts inside (or past) the box
    pub near: Number,
    /// Where the ray leaves the box
    pub far: Number,
}

impl SlabSpan {
    /// Whether the span counts as an intersection: the box is not fully behind the ray,
    /// and the entry is strictly before the exit.
    ///
    /// A ray that only grazes an edge or corner has `near == far`, which is *not* a hit.
    pub fn is_hit(&self) -> bool { self.far >= 0. && self.near < self.far }
}

/// The nearest box a ray hit in a scene
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitInfo {
    /// Entry distance along the ray. Can be negative when the ray starts inside the box
    pub dist: Number,
    /// Index of the box in the scene's box list
    pub index: usize,
}
