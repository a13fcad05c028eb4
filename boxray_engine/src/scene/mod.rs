use crate::core::types::{Channel, Colour};
use crate::scene::axis_box::AxisBox;
use crate::shared::intersect::HitInfo;
use crate::shared::ray::Ray;
use crate::shared::validate;

pub mod axis_box;
pub mod camera;
pub mod preset;

/// An immutable, ordered list of boxes.
///
/// A box's index in the list is its identity, and is what the debug colour of a hit is derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    boxes: Box<[AxisBox]>,
}

// region Constructors

impl Scene {
    pub fn new(boxes: impl Into<Box<[AxisBox]>>) -> Self { Self { boxes: boxes.into() } }

    /// The table-in-a-room scene, see [`preset::REFERENCE_BOXES`]
    pub fn reference() -> Self { Self::new(preset::REFERENCE_BOXES.map(AxisBox::from)) }
}

// endregion Constructors

// region Accessors

impl Scene {
    pub fn boxes(&self) -> &[AxisBox] { &self.boxes }

    pub fn len(&self) -> usize { self.boxes.len() }

    pub fn is_empty(&self) -> bool { self.boxes.is_empty() }

    pub fn get(&self, index: usize) -> Option<&AxisBox> { self.boxes.get(index) }
}

// endregion Accessors

// region Tracing

impl Scene {
    /// Finds the nearest box the ray hits, by scanning every box in index order.
    ///
    /// A box only replaces the current nearest if its entry distance is strictly smaller,
    /// so out of several boxes entered at the same distance the one with the lowest index wins.
    pub fn intersect(&self, ray: &Ray) -> Option<HitInfo> {
        let mut nearest: Option<HitInfo> = None;

        for (index, b) in self.boxes.iter().enumerate() {
            let span = b.intersect(ray);
            if !span.is_hit() {
                continue;
            }
            if nearest.map_or(true, |n| span.near < n.dist) {
                nearest = Some(HitInfo { dist: span.near, index });
            }
        }

        if let Some(hit) = &nearest {
            validate::number(hit.dist);
        }
        nearest
    }

    /// Calculates the debug colour for a ray.
    ///
    /// Misses are black, hits are a grey of `(index + 1) / box_count`, so every box gets a distinct shade
    /// and the last box is white.
    pub fn trace(&self, ray: &Ray) -> Colour {
        match self.intersect(ray) {
            None => Colour::BLACK,
            Some(HitInfo { index, .. }) => {
                let shade = (index + 1) as Channel / self.len() as Channel;
                Colour::new([shade; 3])
            }
        }
    }
}

// endregion Tracing
