//! Call-shape adapters for the builder layer.
//!
//! Two adapters live here. [`OneOrMany`] reduces the "one item" and
//! "ordered sequence of items" call shapes of the `add_fields` family to a
//! single `Vec`. [`Input`] is the tagged union of the three forms every
//! composite setter accepts (literal structural data, a pre-built builder,
//! or a mutator closure); [`Input::resolve`] is the one dispatch point that
//! turns any of them into a builder.

use std::fmt;

use crate::types::{EmbedAuthor, EmbedField, EmbedFooter};

use super::author::EmbedAuthorBuilder;
use super::field::EmbedFieldBuilder;
use super::footer::EmbedFooterBuilder;

/// Either a single item or an ordered sequence of items.
///
/// Operations that add several elements at once take `impl Into<OneOrMany>`
/// so callers can pass one item, an array, or a `Vec` without spelling the
/// wrapper out. [`OneOrMany::into_vec`] reduces every shape to one ordered
/// sequence; an empty sequence stays empty.
#[derive(Debug, Clone)]
pub enum OneOrMany<T> {
    /// A single item.
    One(T),
    /// An ordered sequence of items.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Reduce the call shape to a single ordered sequence.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(items: [T; N]) -> Self {
        OneOrMany::Many(items.into())
    }
}

/// A leaf builder constructible from its structural data form.
pub trait SubBuilder: Default {
    /// The structural data shape this builder serializes to.
    type Data;

    /// Wrap existing structural data, taking ownership of it.
    fn from_data(data: Self::Data) -> Self;
}

/// One sub-object argument: literal structural data, a pre-built builder,
/// or a mutator closure applied to a fresh empty builder.
pub enum Input<B: SubBuilder> {
    /// Literal structural data, copied into a fresh builder.
    Data(B::Data),
    /// A pre-built builder, used as-is.
    Builder(B),
    /// A mutator receiving a fresh empty builder; its return value is used,
    /// which may be a different builder entirely.
    Edit(Box<dyn FnOnce(B) -> B>),
}

/// Field input accepted by the `add_fields` family.
pub type FieldInput = Input<EmbedFieldBuilder>;
/// Author input accepted by [`crate::builders::EmbedBuilder::author`].
pub type AuthorInput = Input<EmbedAuthorBuilder>;
/// Footer input accepted by [`crate::builders::EmbedBuilder::footer`].
pub type FooterInput = Input<EmbedFooterBuilder>;

impl<B: SubBuilder> Input<B> {
    /// Wrap a mutator closure.
    pub fn edit(edit: impl FnOnce(B) -> B + 'static) -> Self {
        Input::Edit(Box::new(edit))
    }

    /// Resolve this input to a builder. The single dispatch point for every
    /// setter that accepts the three input forms.
    pub(crate) fn resolve(self) -> B {
        match self {
            Input::Data(data) => B::from_data(data),
            Input::Builder(builder) => builder,
            Input::Edit(edit) => edit(B::default()),
        }
    }
}

impl<B: SubBuilder> From<B> for Input<B> {
    fn from(builder: B) -> Self {
        Input::Builder(builder)
    }
}

impl From<EmbedField> for FieldInput {
    fn from(data: EmbedField) -> Self {
        Input::Data(data)
    }
}

impl From<EmbedAuthor> for AuthorInput {
    fn from(data: EmbedAuthor) -> Self {
        Input::Data(data)
    }
}

impl From<EmbedFooter> for FooterInput {
    fn from(data: EmbedFooter) -> Self {
        Input::Data(data)
    }
}

impl<B> fmt::Debug for Input<B>
where
    B: SubBuilder + fmt::Debug,
    B::Data: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Data(data) => f.debug_tuple("Data").field(data).finish(),
            Input::Builder(builder) => f.debug_tuple("Builder").field(builder).finish(),
            Input::Edit(_) => f.write_str("Edit(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_many_reduces_to_one_sequence() {
        let one: OneOrMany<u8> = OneOrMany::One(7);
        assert_eq!(one.into_vec(), vec![7]);

        let many: OneOrMany<u8> = vec![1, 2, 3].into();
        assert_eq!(many.into_vec(), vec![1, 2, 3]);

        let from_array: OneOrMany<u8> = [4, 5].into();
        assert_eq!(from_array.into_vec(), vec![4, 5]);
    }

    #[test]
    fn test_one_or_many_empty_sequence_stays_empty() {
        let empty: OneOrMany<u8> = Vec::new().into();
        assert!(empty.into_vec().is_empty());
    }

    #[test]
    fn test_input_forms_resolve_to_equivalent_builders() {
        let data = EmbedField {
            name: Some("n".to_string()),
            value: Some("v".to_string()),
            inline: None,
        };

        let mut prebuilt = EmbedFieldBuilder::new();
        prebuilt.name("n").value("v");

        let from_data = FieldInput::from(data).resolve();
        let from_builder = FieldInput::from(prebuilt).resolve();
        let from_edit = FieldInput::edit(|mut field| {
            field.name("n").value("v");
            field
        })
        .resolve();

        assert_eq!(from_data, from_builder);
        assert_eq!(from_data, from_edit);
    }

    #[test]
    fn test_edit_may_return_a_different_builder() {
        let replacement = EmbedField {
            name: Some("other".to_string()),
            value: Some("builder".to_string()),
            inline: None,
        };
        let swapped = FieldInput::edit({
            let replacement = replacement.clone();
            move |_fresh| EmbedFieldBuilder::from_data(replacement)
        })
        .resolve();

        assert_eq!(swapped, EmbedFieldBuilder::from_data(replacement));
    }
}
