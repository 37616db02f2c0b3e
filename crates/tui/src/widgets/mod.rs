//! Reusable widgets for the TUI.

mod image;

pub use self::image::{HalfBlockImage, ScaleCache};
