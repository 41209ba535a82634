// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error taxonomy for polygon construction and parameterized operations.
// The sweep itself never fails on valid (even self-intersecting) input;
// everything that can fail is validated eagerly, before any mutation.

use thiserror::Error;

/// Errors surfaced by the polygon-set engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A polygon was supplied with fewer than 3 vertices, or a flat
    /// coordinate list with an odd number of values.
    #[error("degenerate polygon input: {0}")]
    DegenerateInput(&'static str),

    /// A parameter failed validation (non-positive arc segment count,
    /// non-finite resize distance). Nothing was mutated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}
