//! Debug-only sanity checks for values flowing through the renderer.
//!
//! All of these compile down to nothing in release builds.

use crate::core::types::{Number, OutputColour, Point3, Vector3};
use crate::shared::ray::Ray;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn point3(v: impl Borrow<Point3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn ray(r: impl Borrow<Ray>) {
    debug_assert_only!();
    let r = r.borrow();
    point3(r.pos());
    normal3(r.dir());
}

/// Colours written by the compute pass are always in `0..=1`, with an opaque alpha
#[inline(always)]
#[track_caller]
pub fn output_colour(c: impl Borrow<OutputColour>) {
    debug_assert_only!();
    let c = c.borrow();
    assert!(
        c.0.iter().all(|chan| (0.0..=1.0).contains(chan)),
        "channels should be in 0..=1; col: {c:?}"
    );
    assert_eq!(c.alpha(), 1.0, "alpha should be opaque; col: {c:?}");
}
