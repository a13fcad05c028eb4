use crate::core::types::{Number, Point3, Vector3};
use crate::shared::intersect::SlabSpan;
use crate::shared::ray::Ray;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// An axis-aligned box, spanning between the two corners `min` and `max`
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct AxisBox {
    /// The corner with the smallest coordinates
    min: Point3,
    /// The corner with the largest coordinates
    max: Point3,
}

// region Constructors

impl AxisBox {
    /// Creates a new box from two corners, which do *not* have to be sorted by min/max
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            min: Point3::min(a, b),
            max: Point3::max(a, b),
        }
    }
}

impl From<[[Number; 3]; 2]> for AxisBox {
    fn from([a, b]: [[Number; 3]; 2]) -> Self { Self::new(a, b) }
}

// endregion Constructors

// region Helper

impl AxisBox {
    pub fn size(&self) -> Vector3 { self.max - self.min }

    pub fn centre(&self) -> Point3 { (self.min + self.max) / 2. }
}

// endregion Helper

// region Intersection

impl AxisBox {
    /// Slab test against the box.
    ///
    /// Per axis, the ray parameters where it crosses the `min` and `max` planes are computed with
    /// the cached reciprocal direction. The entry is the largest of the per-axis nearer crossings,
    /// the exit the smallest of the farther ones.
    ///
    /// A zero direction component gives an infinite reciprocal, so that axis yields `±inf` and only
    /// rejects the ray if it runs outside the slab. If the origin also lies exactly on one of that
    /// slab's planes the product is NaN, which [`Number::min`]/[`Number::max`] discard in favour of
    /// the other operand, so a ray lying in a face plane is always a miss and never produces NaN.
    ///
    /// See [Tavianator's article](https://tavianator.com/2022/ray_box_boundary.html)
    pub fn intersect(&self, ray: &Ray) -> SlabSpan {
        let t1 = (self.min - ray.pos()) * ray.inv_dir();
        let t2 = (self.max - ray.pos()) * ray.inv_dir();

        let mut near = Number::NEG_INFINITY;
        let mut far = Number::INFINITY;
        for axis in 0..3 {
            near = near.max(t1[axis].min(t2[axis]));
            far = far.min(t1[axis].max(t2[axis]));
        }

        SlabSpan { near, far }
    }
}

// endregion Intersection

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_are_sorted() {
        let b = AxisBox::new([1., -2., 3.], [-1., 2., -3.]);
        assert_eq!(b.min(), Point3::new(-1., -2., -3.));
        assert_eq!(b.max(), Point3::new(1., 2., 3.));
        assert_eq!(b.size(), Vector3::new(2., 4., 6.));
        assert_eq!(b.centre(), Point3::ZERO);
    }

    #[test]
    fn ray_from_inside_has_negative_entry() {
        let b = AxisBox::new([-1., -1., -1.], [1., 1., 1.]);
        let span = b.intersect(&Ray::new(Point3::ZERO, Vector3::Z));
        assert_relative_eq!(span.near, -1.);
        assert_relative_eq!(span.far, 1.);
        assert!(span.is_hit());
    }

    #[test]
    fn box_behind_ray_is_missed() {
        let b = AxisBox::new([-1., -1., -5.], [1., 1., -3.]);
        let span = b.intersect(&Ray::new(Point3::ZERO, Vector3::Z));
        assert!(span.far < 0.);
        assert!(!span.is_hit());
    }

    #[test]
    fn grazing_an_edge_is_not_a_hit() {
        // Touches the box only along the edge `x = 0, y = 1`
        let b = AxisBox::new([0., 0., 0.], [1., 1., 1.]);
        let ray = Ray::new(Point3::new(-1., 0., 0.5), Vector3::new(1., 1., 0.));
        let span = b.intersect(&ray);
        assert_eq!(span.near, span.far);
        assert!(!span.is_hit());
    }

    #[test]
    fn parallel_ray_inside_slab_is_unconstrained_on_that_axis() {
        let b = AxisBox::new([-1., -1., 2.], [1., 1., 4.]);
        let span = b.intersect(&Ray::new(Point3::new(0.5, -0.25, 0.), Vector3::Z));
        assert_relative_eq!(span.near, 2.);
        assert_relative_eq!(span.far, 4.);
        assert!(span.is_hit());
    }

    #[test]
    fn ray_in_face_plane_is_a_miss_without_nan() {
        // `(0 - 0) * inf` is NaN on the x-axis
        let b = AxisBox::new([0., -1., 2.], [1., 1., 4.]);
        let span = b.intersect(&Ray::new(Point3::ZERO, Vector3::Z));
        assert!(!span.near.is_nan() && !span.far.is_nan());
        assert!(!span.is_hit());
    }
}
