use serde::{Deserialize, Serialize};

/// A structured inventory record that line items are matched against.
/// Supplied read-only by the caller; the matcher never mutates or persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
    // Opaque unique identifier
    pub id: String,

    // Product name as listed in the catalog
    pub name: String,

    // Free-text category, e.g. "Plywood"
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    // e.g. "8x4 feet"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    // e.g. "18mm"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,

    // e.g. "pieces", "sqft"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl CatalogProduct {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        CatalogProduct {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            brand: None,
            size: None,
            thickness: None,
            unit: None,
        }
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn with_thickness(mut self, thickness: &str) -> Self {
        self.thickness = Some(thickness.to_string());
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }
}

/// One row of an uploaded bill of quantities. The description is raw free
/// text; the parsed fields are optionally pre-filled by upstream extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,

    pub quantity: f64,

    pub unit: String,

    // Informational only, never used for matching
    pub rate: f64,
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl LineItem {
    pub fn new(description: &str, quantity: f64, unit: &str) -> Self {
        LineItem {
            description: description.to_string(),
            quantity,
            unit: unit.to_string(),
            rate: 0.0,
            amount: 0.0,
            product_name: None,
            thickness: None,
            size: None,
            brand: None,
            item_type: None,
        }
    }

    pub fn with_pricing(mut self, rate: f64, amount: f64) -> Self {
        self.rate = rate;
        self.amount = amount;
        self
    }

    pub fn with_product_name(mut self, product_name: &str) -> Self {
        self.product_name = Some(product_name.to_string());
        self
    }

    pub fn with_thickness(mut self, thickness: &str) -> Self {
        self.thickness = Some(thickness.to_string());
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }
}

/// Structured attributes extracted from a free-text description.
/// Ephemeral; produced per call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedLineItem {
    // Residual text after stripping recognized thickness/size tokens.
    // Always produced, possibly empty.
    pub product_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// One ranked candidate for a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub product_id: String,

    // Always within (25, 100]; clamped to 100 at emission
    pub confidence: f64,

    // Which fields contributed, in evaluation order:
    // name, thickness, size, brand, unit
    pub matched_fields: Vec<String>,
}

/// Accepted best match attached to a line item during document auto-match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnnotation {
    pub product_id: String,
    pub confidence: f64,
    pub matched_fields: Vec<String>,
}

/// A line item plus its auto-match outcome. Document auto-match returns
/// these 1:1 with the input, order preserved; unmatched items carry no
/// annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedLineItem {
    pub item: LineItem,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<MatchAnnotation>,
}
