//! Payload records returned by the vehicle-reference API.
//!
//! These are pass-through shapes: the client decodes exactly what the
//! server sends and never validates or converts values. Dimensional and
//! weight values arrive as strings on the wire and stay strings here; the
//! matching `size_unit`/`weight_unit` fields echo whatever unit the caller
//! requested. Unknown server fields are ignored during decoding.

use serde::{Deserialize, Serialize};

/// A top-level market category, e.g. `vehicles` or `marine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment code used in request paths
    pub code: String,
    /// Human-readable description
    pub description: String,
}

/// A vehicle manufacturer, scoped to a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Make {
    /// Server-side row identifier, when exposed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Make code, e.g. `TOYO`
    pub code: String,
    /// Human-readable description, e.g. `Toyota`
    pub description: String,
}

/// A body-style sub-classification nested within a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyStyle {
    /// Body style code
    pub code: String,
    /// Human-readable description, e.g. `wagon`
    pub description: String,
}

/// A model line within a make, e.g. `PRADO` under Toyota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Family code
    pub code: String,
    /// Code of the make this family belongs to
    pub make_code: String,
    /// Human-readable description
    pub description: String,
    /// Body styles offered within this family
    pub body_styles: Vec<BodyStyle>,
}

/// A vehicle record with request-scoped dimensional and weight units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Make identifier
    pub make_code: String,
    /// Family identifier
    pub family_code: String,
    /// Body style identifier
    pub body_style_code: String,
    /// Length in `size_unit`
    pub length_value: String,
    /// Width in `size_unit`
    pub width_value: String,
    /// Height in `size_unit`
    pub height_value: String,
    /// Unit the dimensional values were converted to
    pub size_unit: String,
    /// Weight in `weight_unit`
    pub weight_value: String,
    /// Unit the weight value was converted to
    pub weight_unit: String,
    /// First model year
    pub start_year: String,
    /// Last model year
    pub end_year: String,
}

/// A specific year/configuration instance of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Make identifier
    pub make_code: String,
    /// Family identifier
    pub family_code: String,
    /// Body style identifier
    pub body_style_code: String,
    /// Model year code
    pub year_code: String,
    /// Variant identifier
    pub variant_code: String,
    /// Human-readable description
    pub description: String,
    /// Length in `size_unit`
    pub length_value: String,
    /// Width in `size_unit`
    pub width_value: String,
    /// Height in `size_unit`
    pub height_value: String,
    /// Unit the dimensional values were converted to
    pub size_unit: String,
    /// Weight in `weight_unit`
    pub weight_value: String,
    /// Unit the weight value was converted to
    pub weight_unit: String,
    /// First model year
    pub start_year: String,
    /// Last model year
    pub end_year: String,
}

/// An accessory item with its own dimensions, independent of vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Server-side identifier
    pub id: i64,
    /// Human-readable description, e.g. `roof cargo`
    pub description: String,
    /// Accessory category identifier
    pub category_id: i64,
    /// Length in `size_unit`
    pub length_value: String,
    /// Width in `size_unit`
    pub width_value: String,
    /// Height in `size_unit`
    pub height_value: String,
    /// Unit the dimensional values were converted to
    pub size_unit: String,
    /// Weight in `weight_unit`
    pub weight_value: String,
    /// Unit the weight value was converted to
    pub weight_unit: String,
}
