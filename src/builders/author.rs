//! Builder for the embed author block.

use crate::types::EmbedAuthor;
use crate::validate::{Validation, ValidationError, validate_author};

use super::input::SubBuilder;

/// Builder for the author block shown above the embed title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedAuthorBuilder {
    data: EmbedAuthor,
}

impl EmbedAuthorBuilder {
    /// Create an empty author builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.data.name = Some(name.into());
        self
    }

    /// Set the URL the author name links to.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.data.url = Some(url.into());
        self
    }

    /// Clear the author URL.
    pub fn clear_url(&mut self) -> &mut Self {
        self.data.url = None;
        self
    }

    /// Set the author icon URL.
    pub fn icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.data.icon_url = Some(url.into());
        self
    }

    /// Clear the author icon URL.
    pub fn clear_icon_url(&mut self) -> &mut Self {
        self.data.icon_url = None;
        self
    }

    /// Set the proxied author icon URL.
    pub fn proxy_icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.data.proxy_icon_url = Some(url.into());
        self
    }

    /// Clear the proxied author icon URL.
    pub fn clear_proxy_icon_url(&mut self) -> &mut Self {
        self.data.proxy_icon_url = None;
        self
    }

    /// Serialize to author data using the process-wide validation policy.
    ///
    /// # Errors
    ///
    /// Returns an error if validation is effectively enabled and the block
    /// violates a schema constraint.
    pub fn build(&self) -> Result<EmbedAuthor, ValidationError> {
        self.build_with(Validation::Inherit)
    }

    /// Serialize to author data with an explicit validation override.
    ///
    /// Produces an independent copy of the current state; the builder stays
    /// usable and can be mutated and serialized again.
    ///
    /// # Errors
    ///
    /// Returns an error if the effective policy validates and the block
    /// violates a schema constraint.
    pub fn build_with(&self, validation: Validation) -> Result<EmbedAuthor, ValidationError> {
        let author = self.data.clone();
        if validation.is_enabled() {
            validate_author(&author)?;
        }
        Ok(author)
    }
}

impl From<EmbedAuthor> for EmbedAuthorBuilder {
    /// Wrap existing author data, taking ownership of it.
    fn from(data: EmbedAuthor) -> Self {
        Self { data }
    }
}

impl SubBuilder for EmbedAuthorBuilder {
    type Data = EmbedAuthor;

    fn from_data(data: EmbedAuthor) -> Self {
        data.into()
    }
}
