//! Built-in scenes

use crate::core::types::{Number, Point3, Vector3};
use crate::scene::camera::Camera;
use crate::scene::Scene;

/// A scene together with the camera it is meant to be viewed from
#[derive(Clone, Debug)]
pub struct PresetScene {
    pub name: &'static str,
    pub scene: Scene,
    pub camera: Camera,
}

/// A table standing in a room with three walls, seen from slightly above and in front
pub fn table_room() -> PresetScene {
    PresetScene {
        name: "table_room",
        scene: Scene::reference(),
        camera: REFERENCE_CAMERA,
    }
}

pub const REFERENCE_CAMERA: Camera = Camera {
    pos: Point3::new(0., 2., 5.),
    top_left: Vector3::new(-1., 1., -1.),
    top_right: Vector3::new(1., 1., -1.),
    bottom_left: Vector3::new(-1., -1., -1.),
    bottom_right: Vector3::new(1., -1., -1.),
};

/// Corner pairs of the reference scene's boxes, in index order
pub const REFERENCE_BOXES: [[[Number; 3]; 2]; 9] = [
    // Floor
    [[-5., -0.1, -5.], [5., 0., 5.]],
    // Left, right, back walls
    [[-5.1, 0., -5.], [-5., 5., 5.]],
    [[5., 0., -5.], [5.1, 5., 5.]],
    [[-5., 0., -5.1], [5., 5., -5.]],
    // Table top
    [[-1., 1., -1.], [1., 1.1, 1.]],
    // Table feet
    [[-1., 0., -1.], [-0.8, 1., -0.8]],
    [[-1., 0., 0.8], [-0.8, 1., 1.]],
    [[0.8, 0., -1.], [1., 1., -0.8]],
    [[0.8, 0., 0.8], [1., 1., 1.]],
];
