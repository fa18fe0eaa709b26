//! A circular drag-to-select scale, drawn through the [`render::Canvas`] trait.

pub mod color;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod range;
pub mod render;
pub mod style;
pub mod units;
pub mod widget;

pub use color::Color;
pub use geometry::{Point, Size};
pub use gesture::GestureState;
pub use range::{RangeError, ScaleRange};
pub use render::Canvas;
pub use style::{ScaleStyle, TickKind};
pub use units::{Density, Dp};
pub use widget::Scale;
