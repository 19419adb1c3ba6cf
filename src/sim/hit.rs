//! Hit-testing for axis-aligned squares
//!
//! Two containment checks drive the whole interaction engine: pointer-on-tile
//! for picking, and tile-center-in-slot for drop matching. Both use strict
//! inequalities on all four sides, so a point exactly on an edge misses.

use glam::Vec2;

/// True iff `point` lies strictly inside the square with top-left `origin`
pub fn point_in_square(point: Vec2, origin: Vec2, size: f32) -> bool {
    point.x > origin.x && point.x < origin.x + size && point.y > origin.y && point.y < origin.y + size
}

/// Alias for the drop-matching check: a tile center against a slot square.
/// Same strict semantics; named separately because the two call sites carry
/// different meanings.
#[inline]
pub fn center_in_square(center: Vec2, origin: Vec2, size: f32) -> bool {
    point_in_square(center, origin, size)
}
