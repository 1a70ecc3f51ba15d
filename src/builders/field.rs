//! Builder for embed fields.

use crate::types::EmbedField;
use crate::validate::{Validation, ValidationError, validate_field};

use super::input::SubBuilder;

/// Builder for a single name/value field of an embed.
///
/// A field only exists inside an embed's field list; this builder is handed
/// to [`crate::builders::EmbedBuilder`] through the `add_fields` family of
/// operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedFieldBuilder {
    data: EmbedField,
}

impl EmbedFieldBuilder {
    /// Create an empty field builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.data.name = Some(name.into());
        self
    }

    /// Set the field value.
    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.data.value = Some(value.into());
        self
    }

    /// Set whether the field renders inline with its neighbors.
    pub fn inline(&mut self, inline: bool) -> &mut Self {
        self.data.inline = Some(inline);
        self
    }

    /// Clear the inline flag.
    pub fn clear_inline(&mut self) -> &mut Self {
        self.data.inline = None;
        self
    }

    /// Serialize to field data using the process-wide validation policy.
    ///
    /// # Errors
    ///
    /// Returns an error if validation is effectively enabled and the field
    /// violates a schema constraint.
    pub fn build(&self) -> Result<EmbedField, ValidationError> {
        self.build_with(Validation::Inherit)
    }

    /// Serialize to field data with an explicit validation override.
    ///
    /// Produces an independent copy of the current state; the builder stays
    /// usable and can be mutated and serialized again.
    ///
    /// # Errors
    ///
    /// Returns an error if the effective policy validates and the field
    /// violates a schema constraint.
    pub fn build_with(&self, validation: Validation) -> Result<EmbedField, ValidationError> {
        let field = self.data.clone();
        if validation.is_enabled() {
            validate_field(&field)?;
        }
        Ok(field)
    }
}

impl From<EmbedField> for EmbedFieldBuilder {
    /// Wrap existing field data, taking ownership of it.
    fn from(data: EmbedField) -> Self {
        Self { data }
    }
}

impl SubBuilder for EmbedFieldBuilder {
    type Data = EmbedField;

    fn from_data(data: EmbedField) -> Self {
        data.into()
    }
}
