//! Vehicle profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Touring vehicle category.
///
/// Parsing never fails: an unrecognised category falls back to
/// [`VehicleCategory::Caravan`], the most conservative entry in the
/// driving-limit tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum VehicleCategory {
    Motorhome,
    Caravan,
    Campervan,
}

impl VehicleCategory {
    /// All categories, in table order.
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Motorhome,
        VehicleCategory::Caravan,
        VehicleCategory::Campervan,
    ];

    /// Parse a category name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_server::domain::VehicleCategory;
    ///
    /// assert_eq!(VehicleCategory::parse("Campervan"), VehicleCategory::Campervan);
    /// assert_eq!(VehicleCategory::parse("hovercraft"), VehicleCategory::Caravan);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "motorhome" => VehicleCategory::Motorhome,
            "campervan" => VehicleCategory::Campervan,
            "caravan" => VehicleCategory::Caravan,
            other => {
                tracing::debug!(category = other, "unknown vehicle category, using caravan");
                VehicleCategory::Caravan
            }
        }
    }

    /// Lowercase name as used in JSON and the crossing table.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Motorhome => "motorhome",
            VehicleCategory::Caravan => "caravan",
            VehicleCategory::Campervan => "campervan",
        }
    }
}

impl From<String> for VehicleCategory {
    fn from(s: String) -> Self {
        VehicleCategory::parse(&s)
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The physical properties of a vehicle that affect planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Vehicle category
    pub category: VehicleCategory,
    /// Overall length in metres
    pub length_m: f64,
    /// Gross vehicle weight in kilograms
    pub weight_kg: f64,
}

impl VehicleProfile {
    /// Create a vehicle profile.
    pub fn new(category: VehicleCategory, length_m: f64, weight_kg: f64) -> Self {
        Self {
            category,
            length_m,
            weight_kg,
        }
    }
}

impl Default for VehicleProfile {
    /// A mid-sized motorhome, used when the caller supplies no vehicle.
    fn default() -> Self {
        Self {
            category: VehicleCategory::Motorhome,
            length_m: 7.0,
            weight_kg: 3500.0,
        }
    }
}
