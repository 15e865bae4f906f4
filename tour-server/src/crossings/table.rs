//! The static crossing reference table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, VehicleCategory, VehicleProfile};

use super::CrossingError;
use super::region::Region;

/// The crossing table shipped with the crate.
const BUNDLED_CROSSINGS: &str = include_str!("../../data/crossings.json");

/// How the sea is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingMode {
    Ferry,
    Tunnel,
}

/// Broad grouping of crossings by route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingRegion {
    /// Dover Strait
    Short,
    /// Western Channel, Biscay and Irish Sea routes
    Western,
    /// North Sea routes
    Northern,
}

/// A port or tunnel terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub name: String,
    pub coordinate: Coordinate,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

impl Terminal {
    /// Which side of the sea barrier the terminal is on.
    pub fn side(&self) -> Region {
        match self.country.as_str() {
            "GB" | "IE" => Region::UkIreland,
            _ => Region::Mainland,
        }
    }
}

/// Indicative price range for a vehicle with passengers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

/// A ferry or tunnel route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelCrossing {
    pub id: String,
    pub name: String,
    pub mode: CrossingMode,
    pub departure: Terminal,
    pub arrival: Terminal,
    pub duration_mins: u32,
    /// Human-readable sailing frequency
    pub frequency: String,
    pub operators: Vec<String>,
    /// Categories carried; every category when omitted
    #[serde(default = "all_categories")]
    pub vehicle_types: Vec<VehicleCategory>,
    #[serde(default)]
    pub max_vehicle_length_m: Option<f64>,
    pub cost: CostEstimate,
    pub region: CrossingRegion,
    pub overnight: bool,
}

impl ChannelCrossing {
    /// Crossing time in hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_mins) / 60.0
    }

    /// Whether the crossing carries this vehicle.
    ///
    /// Checks both the category list and the length limit.
    pub fn accepts(&self, vehicle: &VehicleProfile) -> bool {
        self.vehicle_types.contains(&vehicle.category)
            && self
                .max_vehicle_length_m
                .is_none_or(|max| vehicle.length_m <= max)
    }
}

fn all_categories() -> Vec<VehicleCategory> {
    VehicleCategory::ALL.to_vec()
}

/// An immutable, validated list of crossings.
#[derive(Debug, Clone)]
pub struct CrossingTable {
    crossings: Vec<ChannelCrossing>,
}

impl CrossingTable {
    /// Load the table bundled with the crate.
    pub fn bundled() -> Result<Self, CrossingError> {
        Self::from_json(BUNDLED_CROSSINGS)
    }

    /// Parse and validate a table from JSON.
    ///
    /// # Errors
    ///
    /// Fails if the JSON does not parse, the table is empty, an id repeats,
    /// a terminal coordinate is out of range, or a duration is zero.
    pub fn from_json(json: &str) -> Result<Self, CrossingError> {
        let crossings: Vec<ChannelCrossing> = serde_json::from_str(json)?;
        Self::new(crossings)
    }

    /// Validate a list of crossings.
    pub fn new(crossings: Vec<ChannelCrossing>) -> Result<Self, CrossingError> {
        if crossings.is_empty() {
            return Err(CrossingError::Empty);
        }

        let mut seen = HashSet::new();
        for crossing in &crossings {
            if !seen.insert(crossing.id.as_str()) {
                return Err(CrossingError::DuplicateId(crossing.id.clone()));
            }
            for terminal in [&crossing.departure, &crossing.arrival] {
                terminal
                    .coordinate
                    .validate()
                    .map_err(|source| CrossingError::InvalidTerminal {
                        id: crossing.id.clone(),
                        source,
                    })?;
            }
            if crossing.duration_mins == 0 {
                return Err(CrossingError::MissingDuration(crossing.id.clone()));
            }
        }

        Ok(Self { crossings })
    }

    /// All crossings, in table order.
    pub fn all(&self) -> &[ChannelCrossing] {
        &self.crossings
    }

    /// Look up a crossing by id.
    pub fn get(&self, id: &str) -> Option<&ChannelCrossing> {
        self.crossings.iter().find(|c| c.id == id)
    }

    /// Returns the number of crossings.
    pub fn len(&self) -> usize {
        self.crossings.len()
    }

    /// Returns true if the table is empty (never, once validated).
    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal single-crossing JSON with the given id.
    pub(crate) fn crossing_json(id: &str, lat: f64, duration: u32) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "name": "Test crossing",
                "mode": "ferry",
                "departure": {{"name": "A", "coordinate": {{"lat": {lat}, "lng": 1.3}}, "country": "GB"}},
                "arrival": {{"name": "B", "coordinate": {{"lat": 50.9, "lng": 1.8}}, "country": "FR"}},
                "duration_mins": {duration},
                "frequency": "Daily",
                "operators": ["Test Line"],
                "vehicle_types": ["motorhome", "campervan"],
                "max_vehicle_length_m": 8.5,
                "cost": {{"min": 100, "max": 200, "currency": "GBP"}},
                "region": "short",
                "overnight": false
            }}"#
        )
    }

    #[test]
    fn bundled_table_loads() {
        let table = CrossingTable::bundled().unwrap();
        assert!(table.len() >= 15);
        assert!(table.get("dover-calais").is_some());
        assert_eq!(table.get("eurotunnel").unwrap().mode, CrossingMode::Tunnel);
        assert!(table.get("atlantis-express").is_none());
    }

    #[test]
    fn bundled_terminals_face_each_other() {
        let table = CrossingTable::bundled().unwrap();
        for c in table.all() {
            assert_eq!(c.departure.side(), Region::UkIreland, "{}", c.id);
            assert_eq!(c.arrival.side(), Region::Mainland, "{}", c.id);
        }
    }

    #[test]
    fn parses_single_crossing() {
        let json = format!("[{}]", crossing_json("t1", 51.1, 90));
        let table = CrossingTable::from_json(&json).unwrap();
        let c = &table.all()[0];
        assert_eq!(c.duration_hours(), 1.5);
        assert_eq!(c.region, CrossingRegion::Short);
        assert_eq!(c.vehicle_types, vec![VehicleCategory::Motorhome, VehicleCategory::Campervan]);
    }

    #[test]
    fn missing_vehicle_types_means_all() {
        let mut value: serde_json::Value =
            serde_json::from_str(&crossing_json("t1", 51.1, 90)).unwrap();
        value.as_object_mut().unwrap().remove("vehicle_types");
        let table = CrossingTable::from_json(&format!("[{value}]")).unwrap();
        let c = &table.all()[0];
        assert_eq!(c.vehicle_types, VehicleCategory::ALL.to_vec());
        assert!(c.accepts(&VehicleProfile::new(VehicleCategory::Caravan, 7.0, 1500.0)));
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(CrossingTable::from_json("[]"), Err(CrossingError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            CrossingTable::from_json("{not json"),
            Err(CrossingError::Json(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = format!(
            "[{}, {}]",
            crossing_json("dup", 51.1, 90),
            crossing_json("dup", 51.1, 90)
        );
        assert!(matches!(
            CrossingTable::from_json(&json),
            Err(CrossingError::DuplicateId(id)) if id == "dup"
        ));
    }

    #[test]
    fn rejects_bad_terminal() {
        let json = format!("[{}]", crossing_json("bad", 123.0, 90));
        assert!(matches!(
            CrossingTable::from_json(&json),
            Err(CrossingError::InvalidTerminal { .. })
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        let json = format!("[{}]", crossing_json("zero", 51.1, 0));
        assert!(matches!(
            CrossingTable::from_json(&json),
            Err(CrossingError::MissingDuration(_))
        ));
    }

    #[test]
    fn accepts_checks_category_and_length() {
        let json = format!("[{}]", crossing_json("t1", 51.1, 90));
        let table = CrossingTable::from_json(&json).unwrap();
        let c = &table.all()[0];

        assert!(c.accepts(&VehicleProfile::new(VehicleCategory::Motorhome, 7.0, 3500.0)));
        assert!(!c.accepts(&VehicleProfile::new(VehicleCategory::Caravan, 7.0, 1500.0)));
        assert!(!c.accepts(&VehicleProfile::new(VehicleCategory::Motorhome, 9.0, 4500.0)));
    }

    #[test]
    fn terminal_sides() {
        let t = |cc: &str| Terminal {
            name: "x".into(),
            coordinate: Coordinate::unchecked(50.0, 0.0),
            country: cc.into(),
        };
        assert_eq!(t("GB").side(), Region::UkIreland);
        assert_eq!(t("IE").side(), Region::UkIreland);
        assert_eq!(t("FR").side(), Region::Mainland);
        assert_eq!(t("NL").side(), Region::Mainland);
    }
}
