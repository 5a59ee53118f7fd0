//! Pure geometry values for Lightbox
//!
//! Points, vectors, sizes and rectangles used by the animation, input and
//! transition crates. Everything here is plain `Copy` data.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size, Vector};
}
