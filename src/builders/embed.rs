//! Builder for complete Discord embeds.

use crate::time::Timestamp;
use crate::types::{Embed, EmbedImage, EmbedThumbnail};
use crate::validate::{Validation, ValidationError, validate_embed};

use super::author::EmbedAuthorBuilder;
use super::field::EmbedFieldBuilder;
use super::footer::EmbedFooterBuilder;
use super::input::{AuthorInput, FieldInput, FooterInput, OneOrMany};

/// Builder for a complete Discord embed.
///
/// This is the top-level builder. It owns its author, footer, and field
/// builders exclusively; children are created lazily on first access and
/// serialized recursively by [`build`](Self::build). Setters mutate in place
/// and return `&mut Self` so calls chain, in the style of
/// [`std::process::Command`]:
///
/// ```
/// use discord_embed::EmbedBuilder;
///
/// let mut embed = EmbedBuilder::new();
/// embed
///     .title("Deploy finished")
///     .color(0x2ECC71)
///     .timestamp("2026-01-15T09:30:00Z");
/// embed.footer_mut().text("release pipeline");
///
/// let payload = embed.build()?;
/// assert_eq!(payload.title.as_deref(), Some("Deploy finished"));
/// # Ok::<(), discord_embed::ValidationError>(())
/// ```
///
/// Serialization does not consume the builder: the same instance may be
/// serialized, mutated further, and serialized again. Each call produces an
/// independent deep copy of the state.
#[derive(Debug, Clone, Default)]
pub struct EmbedBuilder {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    color: Option<u32>,
    timestamp: Option<String>,
    image: Option<EmbedImage>,
    thumbnail: Option<EmbedThumbnail>,
    author: Option<EmbedAuthorBuilder>,
    footer: Option<EmbedFooterBuilder>,
    fields: Option<Vec<EmbedFieldBuilder>>,
}

impl EmbedBuilder {
    /// Create an empty embed builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The author builder, created empty and stored on first access.
    ///
    /// Subsequent calls return the same instance.
    pub fn author_mut(&mut self) -> &mut EmbedAuthorBuilder {
        self.author.get_or_insert_with(EmbedAuthorBuilder::new)
    }

    /// The footer builder, created empty and stored on first access.
    ///
    /// Subsequent calls return the same instance.
    pub fn footer_mut(&mut self) -> &mut EmbedFooterBuilder {
        self.footer.get_or_insert_with(EmbedFooterBuilder::new)
    }

    /// Read-only view of the field list, created empty and stored on first
    /// access.
    ///
    /// The list is mutated only through [`add_fields`](Self::add_fields),
    /// [`splice_fields`](Self::splice_fields), and
    /// [`set_fields`](Self::set_fields).
    pub fn fields(&mut self) -> &[EmbedFieldBuilder] {
        self.fields.get_or_insert_with(Vec::new)
    }

    /// Append a single field to the end of the field list.
    pub fn add_field(&mut self, field: impl Into<FieldInput>) -> &mut Self {
        self.add_fields(OneOrMany::One(field.into()))
    }

    /// Append fields to the end of the field list.
    ///
    /// Accepts an array, a `Vec`, or a [`OneOrMany`]; each item is literal
    /// field data, a pre-built [`EmbedFieldBuilder`], or a mutator closure
    /// wrapped with [`FieldInput::edit`]. Items are appended in argument
    /// order. The 25-field cap is checked at serialization time, not here.
    ///
    /// ```
    /// use discord_embed::builders::FieldInput;
    /// use discord_embed::{EmbedBuilder, EmbedField};
    ///
    /// let mut embed = EmbedBuilder::new();
    /// embed.add_fields([
    ///     FieldInput::from(EmbedField {
    ///         name: Some("Region".to_string()),
    ///         value: Some("eu-west-1".to_string()),
    ///         inline: Some(true),
    ///     }),
    ///     FieldInput::edit(|mut field| {
    ///         field.name("Status").value("healthy");
    ///         field
    ///     }),
    /// ]);
    /// assert_eq!(embed.fields().len(), 2);
    /// ```
    pub fn add_fields<I>(&mut self, fields: impl Into<OneOrMany<I>>) -> &mut Self
    where
        I: Into<FieldInput>,
    {
        let resolved = fields
            .into()
            .into_vec()
            .into_iter()
            .map(|field| field.into().resolve());
        self.fields.get_or_insert_with(Vec::new).extend(resolved);
        self
    }

    /// Remove, replace, or insert fields in one atomic update.
    ///
    /// Behaves like `Array.prototype.splice`: `index` selects the starting
    /// position, counting from the end when negative; `delete_count`
    /// elements are removed from there, and the resolved replacement items
    /// are inserted in their place. Index and delete count are clamped to
    /// the list bounds.
    pub fn splice_fields<I>(
        &mut self,
        index: isize,
        delete_count: usize,
        replacement: impl Into<OneOrMany<I>>,
    ) -> &mut Self
    where
        I: Into<FieldInput>,
    {
        let resolved: Vec<EmbedFieldBuilder> = replacement
            .into()
            .into_vec()
            .into_iter()
            .map(|field| field.into().resolve())
            .collect();

        let fields = self.fields.get_or_insert_with(Vec::new);
        let len = fields.len();
        let start = if index < 0 {
            len.saturating_sub(index.unsigned_abs())
        } else {
            (index as usize).min(len)
        };
        let end = start.saturating_add(delete_count).min(len);
        fields.splice(start..end, resolved);
        self
    }

    /// Remove fields without inserting replacements.
    ///
    /// Shorthand for a replacement-free [`splice_fields`](Self::splice_fields).
    pub fn remove_fields(&mut self, index: isize, delete_count: usize) -> &mut Self {
        self.splice_fields(index, delete_count, Vec::<FieldInput>::new())
    }

    /// Replace the entire field list.
    ///
    /// Equivalent to splicing the whole list: the existing sequence is
    /// discarded and the resolved new fields are installed in its place.
    pub fn set_fields<I>(&mut self, fields: impl Into<OneOrMany<I>>) -> &mut Self
    where
        I: Into<FieldInput>,
    {
        let len = self.fields.as_ref().map_or(0, Vec::len);
        self.splice_fields(0, len, fields)
    }

    /// Set the title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Clear the title.
    pub fn clear_title(&mut self) -> &mut Self {
        self.title = None;
        self
    }

    /// Set the description.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Clear the description.
    pub fn clear_description(&mut self) -> &mut Self {
        self.description = None;
        self
    }

    /// Set the URL the title links to.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Clear the URL.
    pub fn clear_url(&mut self) -> &mut Self {
        self.url = None;
        self
    }

    /// Set the sidebar color as a 24-bit RGB integer.
    pub fn color(&mut self, color: u32) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Clear the color.
    pub fn clear_color(&mut self) -> &mut Self {
        self.color = None;
        self
    }

    /// Set the timestamp.
    ///
    /// Accepts a `chrono` date value, a system time, a numeric epoch in
    /// milliseconds, or text; every form is stored in the canonical
    /// ISO-8601 representation of [`Timestamp`].
    pub fn timestamp(&mut self, timestamp: impl Into<Timestamp>) -> &mut Self {
        self.timestamp = Some(timestamp.into().into());
        self
    }

    /// Set the timestamp to the current time.
    pub fn timestamp_now(&mut self) -> &mut Self {
        self.timestamp(Timestamp::now())
    }

    /// Clear the timestamp.
    pub fn clear_timestamp(&mut self) -> &mut Self {
        self.timestamp = None;
        self
    }

    /// Set or clear the large image by URL.
    ///
    /// A URL is wrapped into the image block; `None` removes the attribute
    /// entirely, like [`clear_image`](Self::clear_image).
    pub fn image(&mut self, url: impl Into<Option<String>>) -> &mut Self {
        self.image = url.into().map(|url| EmbedImage {
            url: Some(url),
            ..Default::default()
        });
        self
    }

    /// Clear the image.
    pub fn clear_image(&mut self) -> &mut Self {
        self.image = None;
        self
    }

    /// Set or clear the thumbnail by URL.
    ///
    /// A URL is wrapped into the thumbnail block; `None` removes the
    /// attribute entirely, like [`clear_thumbnail`](Self::clear_thumbnail).
    pub fn thumbnail(&mut self, url: impl Into<Option<String>>) -> &mut Self {
        self.thumbnail = url.into().map(|url| EmbedThumbnail {
            url: Some(url),
            ..Default::default()
        });
        self
    }

    /// Clear the thumbnail.
    pub fn clear_thumbnail(&mut self) -> &mut Self {
        self.thumbnail = None;
        self
    }

    /// Set the author from literal data, a pre-built builder, or a mutator
    /// closure wrapped with [`AuthorInput::edit`]. Replaces any prior author.
    pub fn author(&mut self, author: impl Into<AuthorInput>) -> &mut Self {
        self.author = Some(author.into().resolve());
        self
    }

    /// Clear the author.
    pub fn clear_author(&mut self) -> &mut Self {
        self.author = None;
        self
    }

    /// Set the footer from literal data, a pre-built builder, or a mutator
    /// closure wrapped with [`FooterInput::edit`]. Replaces any prior footer.
    pub fn footer(&mut self, footer: impl Into<FooterInput>) -> &mut Self {
        self.footer = Some(footer.into().resolve());
        self
    }

    /// Clear the footer.
    pub fn clear_footer(&mut self) -> &mut Self {
        self.footer = None;
        self
    }

    /// Serialize to embed data using the process-wide validation policy.
    ///
    /// # Errors
    ///
    /// Returns an error if validation is effectively enabled and the
    /// assembled embed violates a schema constraint.
    pub fn build(&self) -> Result<Embed, ValidationError> {
        self.build_with(Validation::Inherit)
    }

    /// Serialize to embed data with an explicit validation override.
    ///
    /// Assembly is two-phase: children serialize with validation forced off,
    /// then the assembled whole is checked once by
    /// [`validate_embed`](crate::validate::validate_embed), which re-checks
    /// every nested constraint. This yields a single complete error report
    /// instead of a cascade of partial errors from the children.
    ///
    /// # Errors
    ///
    /// Returns an error if the effective policy validates and the assembled
    /// embed violates a schema constraint.
    pub fn build_with(&self, validation: Validation) -> Result<Embed, ValidationError> {
        let embed = Embed {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            timestamp: self.timestamp.clone(),
            color: self.color,
            footer: match &self.footer {
                Some(footer) => Some(footer.build_with(Validation::Disabled)?),
                None => None,
            },
            image: self.image.clone(),
            thumbnail: self.thumbnail.clone(),
            author: match &self.author {
                Some(author) => Some(author.build_with(Validation::Disabled)?),
                None => None,
            },
            fields: match &self.fields {
                Some(fields) => Some(
                    fields
                        .iter()
                        .map(|field| field.build_with(Validation::Disabled))
                        .collect::<Result<_, _>>()?,
                ),
                None => None,
            },
        };

        if validation.is_enabled() {
            validate_embed(&embed)?;
        }

        Ok(embed)
    }
}

impl From<Embed> for EmbedBuilder {
    /// Take ownership of existing embed data; author, footer, and fields
    /// are re-wrapped into their builders. The new builder never aliases
    /// caller-held state.
    fn from(embed: Embed) -> Self {
        Self {
            title: embed.title,
            description: embed.description,
            url: embed.url,
            color: embed.color,
            timestamp: embed.timestamp,
            image: embed.image,
            thumbnail: embed.thumbnail,
            author: embed.author.map(EmbedAuthorBuilder::from),
            footer: embed.footer.map(EmbedFooterBuilder::from),
            fields: embed
                .fields
                .map(|fields| fields.into_iter().map(EmbedFieldBuilder::from).collect()),
        }
    }
}
