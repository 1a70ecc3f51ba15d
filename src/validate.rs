//! Embed validation: schema predicates and the validation policy.
//!
//! One predicate per document shape checks structural and semantic
//! constraints against the Discord embed schema and reports the first
//! violation found. The predicates are pure functions over plain structural
//! data, so [`validate_embed`] can reuse the nested predicates without the
//! builders invoking them twice during assembly.
//!
//! Validation runs at serialization time, never at mutation time. Whether a
//! serialization call validates is decided by the process-wide policy
//! ([`set_validation_enabled`], on by default), which every call may override
//! through [`Validation`].

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::DateTime;
use thiserror::Error;
use url::Url;

use crate::types::{Embed, EmbedAuthor, EmbedField, EmbedFooter};

/// Maximum number of fields an embed may carry.
pub const MAX_FIELD_COUNT: usize = 25;
/// Maximum length of the embed title, in characters.
pub const MAX_TITLE_LENGTH: usize = 256;
/// Maximum length of the embed description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;
/// Maximum length of a field name, in characters.
pub const MAX_FIELD_NAME_LENGTH: usize = 256;
/// Maximum length of a field value, in characters.
pub const MAX_FIELD_VALUE_LENGTH: usize = 1024;
/// Maximum length of the author name, in characters.
pub const MAX_AUTHOR_NAME_LENGTH: usize = 256;
/// Maximum length of the footer text, in characters.
pub const MAX_FOOTER_TEXT_LENGTH: usize = 2048;

/// Upper bound of the 24-bit RGB color range.
const MAX_COLOR: u32 = 0xFF_FF_FF;

/// Schemes accepted where a plain web link is expected.
const WEB_SCHEMES: &[&str] = &["http", "https"];
/// Schemes accepted for image and icon references, including message
/// attachments.
const MEDIA_SCHEMES: &[&str] = &["http", "https", "attachment"];

static VALIDATION_ENABLED: AtomicBool = AtomicBool::new(true);

/// Set the process-wide default validation behavior.
///
/// Intended to be set once during process setup. Individual serialization
/// calls can override it through [`Validation`].
pub fn set_validation_enabled(enabled: bool) {
    VALIDATION_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether serialization validates by default.
pub fn validation_enabled() -> bool {
    VALIDATION_ENABLED.load(Ordering::Relaxed)
}

/// Per-call override of the validation policy.
///
/// `Inherit` consults the process-wide default; the other two force the
/// behavior for that call regardless of the global setting. Disabling
/// validation suppresses every [`ValidationError`] for the call but provides
/// no guarantee the resulting data will be accepted by Discord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Use the process-wide default.
    #[default]
    Inherit,
    /// Validate, regardless of the process-wide default.
    Enabled,
    /// Skip validation, regardless of the process-wide default.
    Disabled,
}

impl Validation {
    /// Resolve this override against the process-wide default.
    pub fn is_enabled(self) -> bool {
        match self {
            Validation::Inherit => validation_enabled(),
            Validation::Enabled => true,
            Validation::Disabled => false,
        }
    }
}

/// Embed validation errors.
///
/// Each variant names the offending attribute and the violated constraint.
/// The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required attribute is absent.
    #[error("required attribute `{0}` is missing")]
    Missing(&'static str),
    /// A text attribute is present but empty.
    #[error("attribute `{attribute}` must not be empty")]
    Empty {
        /// The attribute that is empty.
        attribute: &'static str,
    },
    /// A text attribute exceeds its character limit.
    #[error("attribute `{attribute}` is {actual} characters long, limit is {limit}")]
    TooLong {
        /// The attribute that is too long.
        attribute: &'static str,
        /// The maximum number of characters allowed.
        limit: usize,
        /// The actual number of characters provided.
        actual: usize,
    },
    /// The field list exceeds the field cap.
    #[error("embed has {actual} fields, limit is {limit}")]
    TooManyFields {
        /// The maximum number of fields allowed.
        limit: usize,
        /// The actual number of fields provided.
        actual: usize,
    },
    /// A URL attribute does not parse as a URL.
    #[error("attribute `{attribute}` is not a valid URL: `{value}`")]
    InvalidUrl {
        /// The attribute holding the malformed URL.
        attribute: &'static str,
        /// The value that failed to parse.
        value: String,
    },
    /// A URL attribute uses a scheme not accepted for it.
    #[error("attribute `{attribute}` uses disallowed URL scheme `{scheme}`")]
    DisallowedScheme {
        /// The attribute holding the URL.
        attribute: &'static str,
        /// The scheme that is not accepted.
        scheme: String,
    },
    /// The color is outside the 24-bit RGB range.
    #[error("color `{value:#x}` is outside the 24-bit RGB range")]
    ColorOutOfRange {
        /// The value that is out of range.
        value: u32,
    },
    /// The timestamp is not well-formed ISO-8601 text.
    #[error("timestamp `{value}` is not valid ISO-8601 text")]
    InvalidTimestamp {
        /// The value that failed to parse.
        value: String,
    },
}

fn check_text(
    attribute: &'static str,
    value: Option<&str>,
    limit: usize,
    required: bool,
) -> Result<(), ValidationError> {
    let Some(text) = value else {
        if required {
            return Err(ValidationError::Missing(attribute));
        }
        return Ok(());
    };

    if text.is_empty() {
        return Err(ValidationError::Empty { attribute });
    }

    let actual = text.chars().count();
    if actual > limit {
        return Err(ValidationError::TooLong {
            attribute,
            limit,
            actual,
        });
    }

    Ok(())
}

fn check_url(
    attribute: &'static str,
    value: Option<&str>,
    schemes: &[&str],
) -> Result<(), ValidationError> {
    let Some(text) = value else {
        return Ok(());
    };

    let url = Url::parse(text).map_err(|_| ValidationError::InvalidUrl {
        attribute,
        value: text.to_string(),
    })?;

    if !schemes.contains(&url.scheme()) {
        return Err(ValidationError::DisallowedScheme {
            attribute,
            scheme: url.scheme().to_string(),
        });
    }

    Ok(())
}

/// Validates a single embed field.
///
/// Checks that name and value are present, non-empty, and within their
/// character limits.
pub fn validate_field(field: &EmbedField) -> Result<(), ValidationError> {
    check_text(
        "field.name",
        field.name.as_deref(),
        MAX_FIELD_NAME_LENGTH,
        true,
    )?;
    check_text(
        "field.value",
        field.value.as_deref(),
        MAX_FIELD_VALUE_LENGTH,
        true,
    )?;
    Ok(())
}

/// Validates an embed author block.
///
/// Checks that the name is present, non-empty, and within its character
/// limit, and that every URL attribute is well-formed with an accepted
/// scheme.
pub fn validate_author(author: &EmbedAuthor) -> Result<(), ValidationError> {
    check_text(
        "author.name",
        author.name.as_deref(),
        MAX_AUTHOR_NAME_LENGTH,
        true,
    )?;
    check_url("author.url", author.url.as_deref(), WEB_SCHEMES)?;
    check_url("author.icon_url", author.icon_url.as_deref(), MEDIA_SCHEMES)?;
    check_url(
        "author.proxy_icon_url",
        author.proxy_icon_url.as_deref(),
        MEDIA_SCHEMES,
    )?;
    Ok(())
}

/// Validates an embed footer block.
///
/// Checks that the text is present, non-empty, and within its character
/// limit, and that every URL attribute is well-formed with an accepted
/// scheme.
pub fn validate_footer(footer: &EmbedFooter) -> Result<(), ValidationError> {
    check_text(
        "footer.text",
        footer.text.as_deref(),
        MAX_FOOTER_TEXT_LENGTH,
        true,
    )?;
    check_url("footer.icon_url", footer.icon_url.as_deref(), MEDIA_SCHEMES)?;
    check_url(
        "footer.proxy_icon_url",
        footer.proxy_icon_url.as_deref(),
        MEDIA_SCHEMES,
    )?;
    Ok(())
}

/// Validates a complete embed.
///
/// Checks the scalar attributes, then re-checks every nested block through
/// the shape's own predicate, including the 25-field cap and each field's
/// constraints. This is the single validation pass run by
/// [`crate::builders::EmbedBuilder`] after assembly, so a validated embed
/// never produces a cascade of partial errors from its children.
pub fn validate_embed(embed: &Embed) -> Result<(), ValidationError> {
    if let Some(fields) = &embed.fields {
        if fields.len() > MAX_FIELD_COUNT {
            return Err(ValidationError::TooManyFields {
                limit: MAX_FIELD_COUNT,
                actual: fields.len(),
            });
        }
    }

    check_text("title", embed.title.as_deref(), MAX_TITLE_LENGTH, false)?;
    check_text(
        "description",
        embed.description.as_deref(),
        MAX_DESCRIPTION_LENGTH,
        false,
    )?;
    check_url("url", embed.url.as_deref(), WEB_SCHEMES)?;

    if let Some(color) = embed.color {
        if color > MAX_COLOR {
            return Err(ValidationError::ColorOutOfRange { value: color });
        }
    }

    if let Some(timestamp) = &embed.timestamp {
        if DateTime::parse_from_rfc3339(timestamp).is_err() {
            return Err(ValidationError::InvalidTimestamp {
                value: timestamp.clone(),
            });
        }
    }

    if let Some(image) = &embed.image {
        if image.url.is_none() {
            return Err(ValidationError::Missing("image.url"));
        }
        check_url("image.url", image.url.as_deref(), MEDIA_SCHEMES)?;
    }

    if let Some(thumbnail) = &embed.thumbnail {
        if thumbnail.url.is_none() {
            return Err(ValidationError::Missing("thumbnail.url"));
        }
        check_url("thumbnail.url", thumbnail.url.as_deref(), MEDIA_SCHEMES)?;
    }

    if let Some(author) = &embed.author {
        validate_author(author)?;
    }

    if let Some(footer) = &embed.footer {
        validate_footer(footer)?;
    }

    if let Some(fields) = &embed.fields {
        for field in fields {
            validate_field(field)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmbedImage;

    fn field(name: &str, value: &str) -> EmbedField {
        EmbedField {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
            inline: None,
        }
    }

    #[test]
    fn test_validate_embed_accepts_minimal_embed() {
        let embed = Embed {
            title: Some("hello".to_string()),
            ..Default::default()
        };
        assert!(validate_embed(&embed).is_ok());
    }

    #[test]
    fn test_validate_embed_rejects_over_cap_field_list() {
        let embed = Embed {
            fields: Some((0..26).map(|i| field(&format!("f{i}"), "v")).collect()),
            ..Default::default()
        };

        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::TooManyFields {
                limit: MAX_FIELD_COUNT,
                actual: 26,
            })
        );
    }

    #[test]
    fn test_validate_embed_accepts_exactly_25_fields() {
        let embed = Embed {
            fields: Some((0..25).map(|i| field(&format!("f{i}"), "v")).collect()),
            ..Default::default()
        };
        assert!(validate_embed(&embed).is_ok());
    }

    #[test]
    fn test_validate_field_requires_name_and_value() {
        let missing_name = EmbedField {
            value: Some("v".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_field(&missing_name),
            Err(ValidationError::Missing("field.name"))
        );

        let empty_value = EmbedField {
            name: Some("n".to_string()),
            value: Some(String::new()),
            inline: None,
        };
        assert_eq!(
            validate_field(&empty_value),
            Err(ValidationError::Empty {
                attribute: "field.value"
            })
        );
    }

    #[test]
    fn test_validate_embed_rejects_over_long_title() {
        let embed = Embed {
            title: Some("x".repeat(257)),
            ..Default::default()
        };

        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::TooLong {
                attribute: "title",
                limit: MAX_TITLE_LENGTH,
                actual: 257,
            })
        );
    }

    #[test]
    fn test_character_limits_count_chars_not_bytes() {
        // 256 four-byte scalars stay within the 256-character title limit.
        let embed = Embed {
            title: Some("\u{1F980}".repeat(256)),
            ..Default::default()
        };
        assert!(validate_embed(&embed).is_ok());
    }

    #[test]
    fn test_validate_embed_rejects_malformed_url() {
        let embed = Embed {
            url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_embed(&embed),
            Err(ValidationError::InvalidUrl {
                attribute: "url",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_embed_rejects_disallowed_scheme() {
        let embed = Embed {
            url: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::DisallowedScheme {
                attribute: "url",
                scheme: "javascript".to_string(),
            })
        );
    }

    #[test]
    fn test_attachment_scheme_allowed_for_media_only() {
        let embed = Embed {
            image: Some(EmbedImage {
                url: Some("attachment://chart.png".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(validate_embed(&embed).is_ok());

        let embed = Embed {
            url: Some("attachment://chart.png".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_embed(&embed),
            Err(ValidationError::DisallowedScheme { attribute: "url", .. })
        ));
    }

    #[test]
    fn test_validate_embed_rejects_out_of_range_color() {
        let embed = Embed {
            color: Some(0x1_00_00_00),
            ..Default::default()
        };
        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::ColorOutOfRange { value: 0x1_00_00_00 })
        );
    }

    #[test]
    fn test_validate_embed_rejects_malformed_timestamp() {
        let embed = Embed {
            timestamp: Some("tomorrow-ish".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::InvalidTimestamp {
                value: "tomorrow-ish".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_embed_requires_image_url() {
        let embed = Embed {
            image: Some(EmbedImage::default()),
            ..Default::default()
        };
        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::Missing("image.url"))
        );
    }

    #[test]
    fn test_validate_embed_reuses_nested_predicates() {
        // The root predicate reports the same error the nested predicate
        // would report for the block on its own.
        let author = EmbedAuthor::default();
        let embed = Embed {
            author: Some(author.clone()),
            ..Default::default()
        };

        assert_eq!(validate_embed(&embed), validate_author(&author));
        assert_eq!(
            validate_embed(&embed),
            Err(ValidationError::Missing("author.name"))
        );
    }

    #[test]
    fn test_validation_policy_toggle() {
        // Default is on; flip it off and back within one test to keep the
        // global state stable for the rest of the suite.
        assert!(validation_enabled());
        assert!(Validation::Inherit.is_enabled());

        let mut invalid = crate::builders::EmbedBuilder::new();
        invalid.timestamp("tomorrow-ish");

        set_validation_enabled(false);
        assert!(!validation_enabled());
        assert!(!Validation::Inherit.is_enabled());
        assert!(Validation::Enabled.is_enabled());
        // Serialization through the default policy now skips validation.
        assert!(invalid.build().is_ok());

        set_validation_enabled(true);
        assert!(validation_enabled());
        assert!(!Validation::Disabled.is_enabled());
        // The same state raises once the default is back on.
        assert!(invalid.build().is_err());
    }
}
