//! Travel seasons and driving styles.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Meteorological season of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Derive the season from a calendar date.
    ///
    /// March–May is spring, June–August summer, September–November
    /// autumn, and everything else winter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_server::domain::Season;
    /// use chrono::NaiveDate;
    ///
    /// let d = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    /// assert_eq!(Season::from_date(d), Season::Summer);
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// Derive the season from a 1-based month number.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Resolve the season for a trip.
    ///
    /// An explicit season wins; otherwise it is derived from the start
    /// date; otherwise summer.
    pub fn resolve(explicit: Option<Season>, start_date: Option<NaiveDate>) -> Self {
        explicit
            .or_else(|| start_date.map(Season::from_date))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How hard the traveller wants to drive each day.
///
/// Unrecognised styles fall back to [`DrivingStyle::Relaxed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DrivingStyle {
    Relaxed,
    #[default]
    Moderate,
    Intensive,
}

/// Vehicle-independent daily caps for a driving style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleLimits {
    /// Maximum hours behind the wheel per day
    pub max_hours: f64,
    /// Maximum kilometres per day
    pub max_km_per_day: f64,
}

impl DrivingStyle {
    /// Parse a style name, case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => DrivingStyle::Relaxed,
            "moderate" => DrivingStyle::Moderate,
            "intensive" => DrivingStyle::Intensive,
            other => {
                tracing::debug!(style = other, "unknown driving style, using relaxed");
                DrivingStyle::Relaxed
            }
        }
    }

    /// The trip-settings-level caps for this style.
    pub fn base_limits(&self) -> StyleLimits {
        match self {
            DrivingStyle::Relaxed => StyleLimits {
                max_hours: 5.0,
                max_km_per_day: 300.0,
            },
            DrivingStyle::Moderate => StyleLimits {
                max_hours: 6.0,
                max_km_per_day: 400.0,
            },
            DrivingStyle::Intensive => StyleLimits {
                max_hours: 8.0,
                max_km_per_day: 500.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrivingStyle::Relaxed => "relaxed",
            DrivingStyle::Moderate => "moderate",
            DrivingStyle::Intensive => "intensive",
        }
    }
}

impl From<String> for DrivingStyle {
    fn from(s: String) -> Self {
        DrivingStyle::parse(&s)
    }
}

impl fmt::Display for DrivingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
