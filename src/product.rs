//! Product data model
//!
//! `Product` is the server's record as the client sees it. The server is the
//! only source of truth, so every copy held here is transient.
//! `ProductDraft` is the editable half (no id) that goes out on POST and PUT.

use serde::{Deserialize, Serialize, Serializer};

/// A product as returned by the Product API
///
/// The API names the identifier `_id`; a plain `id` is read when `_id` is
/// absent. Every field is optional on the wire because the single-item
/// endpoint may omit any of them or send `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireProduct")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}

/// Product as decoded from a response body, before defaults are applied
///
/// `_id` and `id` are separate fields so a body carrying both (virtual ids)
/// still decodes. Extra keys such as `__v` are ignored.
#[derive(Deserialize)]
struct WireProduct {
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Self {
            id: wire.underscore_id.or(wire.id).unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            price: wire.price,
        }
    }
}

impl Product {
    /// Price formatted for display: "$12.50" or "Price not available"
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${:.2}", price),
            None => "Price not available".to_string(),
        }
    }
}

/// Editable fields of a product, exactly as the user typed them
///
/// `price` stays a string until it is sent: the add flow validates it, the
/// edit flow forwards it untouched and lets the server decide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// Reasons a draft fails the required-field check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftProblem {
    /// name, description or price is empty
    MissingField,
    /// price is not a number, or is negative
    ///
    /// Only create checks this; edits send the raw price and let the server
    /// decide.
    InvalidPrice,
}

impl DraftProblem {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField => "All fields are required.",
            Self::InvalidPrice => "Price must be a non-negative number.",
        }
    }
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    /// Parsed price, if the raw value is a finite number
    pub fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
    }

    /// Required-field check used before a create is sent
    pub fn check_required(&self) -> Result<(), DraftProblem> {
        if self.name.is_empty() || self.description.is_empty() || self.price.is_empty() {
            return Err(DraftProblem::MissingField);
        }
        match self.parsed_price() {
            Some(price) if price >= 0.0 => Ok(()),
            _ => Err(DraftProblem::InvalidPrice),
        }
    }
}

/// Wire body: `{name, description, price}` with price as a JSON number
/// whenever the raw value parses, otherwise the raw string.
impl Serialize for ProductDraft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut body = serializer.serialize_struct("ProductDraft", 3)?;
        body.serialize_field("name", &self.name)?;
        body.serialize_field("description", &self.description)?;
        match self.parsed_price() {
            Some(price) => body.serialize_field("price", &price)?,
            None => body.serialize_field("price", &self.price)?,
        }
        body.end()
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}
