//! Fluent construction and validation of Discord rich embeds.
//!
//! An embed is assembled incrementally through chainable builders instead of
//! hand-building nested JSON. Serializing a builder walks its children,
//! produces plain structural data ([`Embed`]), and validates the assembled
//! whole against the Discord embed schema unless validation is disabled, so
//! what leaves this crate either conforms to the schema or fails with a
//! descriptive [`ValidationError`] before anything is transmitted.
//!
//! ```
//! use discord_embed::EmbedBuilder;
//!
//! let mut embed = EmbedBuilder::new();
//! embed
//!     .title("Deploy finished")
//!     .color(0x2ECC71)
//!     .timestamp("2026-01-15T09:30:00Z");
//! embed.author_mut().name("release-bot");
//! embed.add_field(discord_embed::EmbedField {
//!     name: Some("Environment".to_string()),
//!     value: Some("production".to_string()),
//!     inline: Some(true),
//! });
//!
//! let payload = embed.build()?;
//! assert_eq!(payload.title.as_deref(), Some("Deploy finished"));
//! assert_eq!(payload.timestamp.as_deref(), Some("2026-01-15T09:30:00.000Z"));
//! # Ok::<(), discord_embed::ValidationError>(())
//! ```
//!
//! Transport is out of scope: the serialized [`Embed`] is plain data for an
//! HTTP client to ship. Validation behavior is controlled process-wide by
//! [`set_validation_enabled`] and per call through [`Validation`].

pub mod builders;
pub mod time;
pub mod types;
pub mod validate;

pub use builders::{EmbedAuthorBuilder, EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};
pub use time::Timestamp;
pub use types::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail};
pub use validate::{Validation, ValidationError, set_validation_enabled, validation_enabled};
