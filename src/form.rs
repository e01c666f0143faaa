//! Editable product form state
//!
//! Holds the user's draft as plain strings, one per field. Changes are
//! shallow: setting one field never touches the others.

use crate::product::{Product, ProductDraft};

/// Editable product fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::Price];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Product Name",
            Field::Description => "Product Description",
            Field::Price => "Product Price",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter product name",
            Field::Description => "Enter product description",
            Field::Price => "Enter product price",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Description => 1,
            Field::Price => 2,
        }
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Draft values for the add and edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: [String; 3],
}

impl FormState {
    /// Blank form (add flow)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form seeded from a fetched product (edit flow)
    pub fn from_product(product: &Product) -> Self {
        let draft = ProductDraft::from(product);
        Self {
            values: [draft.name, draft.description, draft.price],
        }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Replace exactly one field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    pub fn draft(&self) -> ProductDraft {
        ProductDraft::new(
            self.get(Field::Name),
            self.get(Field::Description),
            self.get(Field::Price),
        )
    }
}
