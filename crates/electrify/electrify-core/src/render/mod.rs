//! Report renderers.

mod text;

pub use text::{render_text, shade, TextReport};
