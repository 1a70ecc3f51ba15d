//! Builder for the embed footer block.

use crate::types::EmbedFooter;
use crate::validate::{Validation, ValidationError, validate_footer};

use super::input::SubBuilder;

/// Builder for the footer block at the bottom of an embed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedFooterBuilder {
    data: EmbedFooter,
}

impl EmbedFooterBuilder {
    /// Create an empty footer builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.data.text = Some(text.into());
        self
    }

    /// Set the footer icon URL.
    pub fn icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.data.icon_url = Some(url.into());
        self
    }

    /// Clear the footer icon URL.
    pub fn clear_icon_url(&mut self) -> &mut Self {
        self.data.icon_url = None;
        self
    }

    /// Set the proxied footer icon URL.
    pub fn proxy_icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.data.proxy_icon_url = Some(url.into());
        self
    }

    /// Clear the proxied footer icon URL.
    pub fn clear_proxy_icon_url(&mut self) -> &mut Self {
        self.data.proxy_icon_url = None;
        self
    }

    /// Serialize to footer data using the process-wide validation policy.
    ///
    /// # Errors
    ///
    /// Returns an error if validation is effectively enabled and the block
    /// violates a schema constraint.
    pub fn build(&self) -> Result<EmbedFooter, ValidationError> {
        self.build_with(Validation::Inherit)
    }

    /// Serialize to footer data with an explicit validation override.
    ///
    /// Produces an independent copy of the current state; the builder stays
    /// usable and can be mutated and serialized again.
    ///
    /// # Errors
    ///
    /// Returns an error if the effective policy validates and the block
    /// violates a schema constraint.
    pub fn build_with(&self, validation: Validation) -> Result<EmbedFooter, ValidationError> {
        let footer = self.data.clone();
        if validation.is_enabled() {
            validate_footer(&footer)?;
        }
        Ok(footer)
    }
}

impl From<EmbedFooter> for EmbedFooterBuilder {
    /// Wrap existing footer data, taking ownership of it.
    fn from(data: EmbedFooter) -> Self {
        Self { data }
    }
}

impl SubBuilder for EmbedFooterBuilder {
    type Data = EmbedFooter;

    fn from_data(data: EmbedFooter) -> Self {
        data.into()
    }
}
