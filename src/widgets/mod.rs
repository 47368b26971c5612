//! Reusable input widgets.

pub mod input_box;

pub use input_box::{InputBox, MultilineInput};
