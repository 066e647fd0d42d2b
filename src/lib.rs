//! tileforge-collections: deterministic container utilities for 2D rendering.
//!
//! This crate provides the grid and sequence manipulation layer used by the
//! renderer and animation tooling: quarter-turn rotation of tile grids,
//! frame-index range generation, snapping values onto sorted scales, and
//! uniform in-place shuffling driven by a caller-supplied random source.
//!
//! The design favors small, pure functions over plain `Vec`-based containers.
//! Absence is communicated through `None` or empty results rather than
//! errors, so callers never need recovery logic for malformed input.
pub mod grid;
pub mod nearest;
pub mod range;
pub mod seq;
