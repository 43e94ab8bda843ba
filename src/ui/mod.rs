pub mod render_view;

pub use render_view::{RenderView, render_lines};
