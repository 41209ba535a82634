// polybool-rust: integer polygon-set Boolean engine (sweep-line union,
// intersection, difference and XOR, trapezoid fracturing, and resize)
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod chain;
pub mod dict;
pub mod error;
pub mod geom;
pub mod offset;
pub mod ops;
pub mod polyset;
pub mod sweep;
pub mod trapezoid;

pub use error::PolyError;
pub use geom::{Coord, Point};
pub use ops::BoolOp;
pub use polyset::{CornerStyle, Polygon, PolygonSet};
