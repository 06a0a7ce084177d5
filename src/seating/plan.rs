use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum_macros::Display;

/// Cabin class of a seating section or a passenger ticket.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SeatClass {
    Business,
    #[default]
    Economy,
}

impl From<&str> for SeatClass {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("business") {
            SeatClass::Business
        } else {
            SeatClass::Economy
        }
    }
}

impl From<String> for SeatClass {
    fn from(value: String) -> Self { SeatClass::from(value.as_str()) }
}

impl From<SeatClass> for String {
    fn from(value: SeatClass) -> Self { value.to_string() }
}

/// One contiguous block of rows sharing a class and a seat layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinSection {
    class_name: SeatClass,
    rows: u32,
    /// Seats per group, left to right; groups are separated by aisles.
    layout: Vec<u32>,
    /// Seat letters assigned in order across all groups of a row.
    letters: String,
}

impl CabinSection {
    pub fn new(class: SeatClass, rows: u32, layout: &[u32], letters: &str) -> Self {
        Self { class_name: class, rows, layout: layout.to_vec(), letters: letters.to_string() }
    }

    pub fn class(&self) -> SeatClass { self.class_name }
    pub fn rows(&self) -> u32 { self.rows }
    pub fn layout(&self) -> &[u32] { &self.layout }
    pub fn letters(&self) -> &str { &self.letters }
    pub fn seats_per_row(&self) -> u32 { self.layout.iter().sum() }
}

/// Typed cabin layout of an aircraft type.
///
/// Parsed once when a flight record is read or created. On the wire the plan
/// travels as a JSON string inside `seatingPlanConfig`; an object is accepted as
/// well. A missing or malformed configuration yields an empty plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatingPlan {
    #[serde(default)]
    sections: Vec<CabinSection>,
}

impl SeatingPlan {
    pub fn new(sections: Vec<CabinSection>) -> Self { Self { sections } }

    pub fn sections(&self) -> &[CabinSection] { &self.sections }
    pub fn is_empty(&self) -> bool { self.sections.is_empty() }
    pub fn total_rows(&self) -> u32 { self.sections.iter().map(CabinSection::rows).sum() }
    pub fn total_seats(&self) -> u32 { self.sections.iter().map(|s| s.rows() * s.seats_per_row()).sum() }

    /// Parses the string form of a seating configuration.
    pub fn parse(raw: &str) -> Result<Self, SeatingPlanError> {
        serde_json::from_str(raw).map_err(|e| SeatingPlanError(e.to_string()))
    }

    /// Parses `raw`, falling back to an empty plan on malformed input.
    pub fn parse_or_empty(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        Self::parse(raw).unwrap_or_else(|e| {
            crate::warn!("Invalid seating plan configuration, using empty plan: {e}");
            Self::default()
        })
    }

    /// Layouts of the aircraft types the flight creation form offers.
    pub fn builtin(model_name: &str) -> Option<Self> {
        let sections = match model_name {
            "Embraer E195" => vec![
                CabinSection::new(SeatClass::Business, 3, &[1, 2], "ADF"),
                CabinSection::new(SeatClass::Economy, 12, &[2, 2], "ACDF"),
            ],
            "Boeing 737-800" => vec![
                CabinSection::new(SeatClass::Business, 3, &[2, 2], "ACDF"),
                CabinSection::new(SeatClass::Economy, 25, &[3, 3], "ABCDEF"),
            ],
            "Boeing 787 Dreamliner" => vec![
                CabinSection::new(SeatClass::Business, 5, &[2, 2, 2], "ACDGHK"),
                CabinSection::new(SeatClass::Economy, 35, &[3, 4, 3], "ABCDEFGHJK"),
            ],
            _ => return None,
        };
        Some(Self::new(sections))
    }
}

/// Names of the aircraft types with a built-in layout.
pub const BUILTIN_MODELS: [&str; 3] = ["Embraer E195", "Boeing 737-800", "Boeing 787 Dreamliner"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingPlanError(String);

impl fmt::Display for SeatingPlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl std::error::Error for SeatingPlanError {}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlan {
    Text(String),
    Structured(SeatingPlan),
    Other(serde_json::Value),
}

/// Serde adapter for the `seatingPlanConfig` field.
pub mod config_field {
    use super::{Deserialize, Deserializer, RawPlan, SeatingPlan, Serialize, Serializer};

    pub fn serialize<S>(plan: &SeatingPlan, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = serde_json::to_string(plan).map_err(serde::ser::Error::custom)?;
        text.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SeatingPlan, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawPlan>::deserialize(deserializer)? {
            Some(RawPlan::Text(raw)) => SeatingPlan::parse_or_empty(&raw),
            Some(RawPlan::Structured(plan)) => plan,
            Some(RawPlan::Other(value)) => {
                crate::warn!("Unsupported seating plan value {value}, using empty plan");
                SeatingPlan::default()
            }
            None => SeatingPlan::default(),
        })
    }
}
