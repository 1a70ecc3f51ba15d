//! Builder pattern API for assembling Discord embeds from scratch.
//!
//! This module provides fluent builders for constructing valid embed payloads
//! with proper validation and ergonomic APIs. A builder accumulates partial
//! data through chainable setters and serializes it to plain structural data
//! on demand; validation runs at serialization time according to the policy
//! in [`crate::validate`].

/// Builder for the embed author block.
pub mod author;
/// Builder for complete embeds.
pub mod embed;
/// Builder for embed fields.
pub mod field;
/// Builder for the embed footer block.
pub mod footer;
/// Call-shape adapters shared by the builder setters.
pub mod input;


// Re-export builders at module level
pub use author::EmbedAuthorBuilder;
pub use embed::EmbedBuilder;
pub use field::EmbedFieldBuilder;
pub use footer::EmbedFooterBuilder;
pub use input::{AuthorInput, FieldInput, FooterInput, Input, OneOrMany, SubBuilder};
