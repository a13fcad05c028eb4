use crate::core::types::{Number, Point2, Point3, Size2, Vector3};
use crate::shared::ray::Ray;
use crate::shared::validate;
use serde::{Deserialize, Serialize};

/// A camera described by a bilinear basis over the image plane.
///
/// The four corner vectors are the (unnormalised) ray directions through the corners of the image.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position the camera is located at, and the origin of every ray
    pub pos: Point3,
    pub top_left: Vector3,
    pub top_right: Vector3,
    pub bottom_left: Vector3,
    pub bottom_right: Vector3,
}

impl Camera {
    /// Calculates the ray through the centre of pixel `(px, py)`, for an image of `width * height` pixels.
    ///
    /// Pixel `(0, 0)` is the top-left of the image. The pixel centre is mapped into the unit square,
    /// the corner directions are interpolated down the left and right edges, then across between them.
    ///
    /// # Requirements
    /// `px < width` and `py < height`
    pub fn calc_ray(&self, px: u32, py: u32, extent: Size2) -> Ray {
        debug_assert!(
            px < extent.x && py < extent.y,
            "pixel ({px}, {py}) outside image {extent}"
        );

        let p = (Point2::new(px as Number, py as Number) + 0.5) / extent.as_vec2();
        let left = self.top_left.lerp(self.bottom_left, p.y);
        let right = self.top_right.lerp(self.bottom_right, p.y);
        let dir = left.lerp(right, p.x);

        let ray = Ray::new(self.pos, dir);
        validate::ray(&ray);
        ray
    }
}
