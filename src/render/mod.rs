//! Document tree and the render pass that fills it.

/// Render configuration and the render entry point.
pub mod core;
/// Nestable Markdown document tree.
pub mod markdown;
/// Mutable state shared by views during one render.
pub mod state;
/// Identifier and ordering helpers.
pub mod utils;

pub use self::core::{LinkFormatter, RenderOptions, RenderOutput, render};
pub use self::markdown::Markdown;
pub use self::state::RenderState;
