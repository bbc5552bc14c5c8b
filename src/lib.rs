//! Core library for polydoc, rendering API reference documentation for several language
//! audiences from one resolved type-system graph.
//!
//! The [`Documentation`] front object owns the graph. Each render walks one module with a
//! [`LanguageFormatter`] chosen by [`RenderOptions`], builds one view per entity, and serializes
//! those views twice: as a [`Markdown`] document and as an [`ApiReferenceSchema`] record sharing
//! the same section identifiers.

/// Diagnostics collected while rendering.
pub mod diagnostics;

/// Front object tying a graph to render options.
pub mod documentation;

/// Error types for the library.
pub mod error;

/// Read-only type-system graph.
pub mod model;

/// Document tree and render pass.
pub mod render;

/// Structured output records.
pub mod schema;

/// Per-language naming and snippet conventions.
pub mod transpile;

/// Entity views shared by both outputs.
pub mod view;

pub use crate::diagnostics::{Diagnostic, Diagnostics};
pub use crate::documentation::Documentation;
pub use crate::error::{RenderError, Result, UnknownLanguage, UnsupportedConstructError};
pub use crate::model::TypeSystem;
pub use crate::render::{LinkFormatter, Markdown, RenderOptions, RenderOutput};
pub use crate::schema::{ApiReferenceSchema, DocumentationSchema};
pub use crate::transpile::{Language, LanguageFormatter, TranspiledType};
