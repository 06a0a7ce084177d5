use crate::seating::SeatClass;
use serde::{Deserialize, Serialize};

/// Passenger manifest entry. Read-only on the client side: the roster service
/// supplies it, seat numbers included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    id: u64,
    name: String,
    #[serde(default)]
    age: u32,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    nationality: String,
    #[serde(default)]
    seat_type: SeatClass,
    #[serde(default)]
    seat_number: Option<String>,
    #[serde(default)]
    parent_id: Option<u64>,
    #[serde(default)]
    affiliated_passenger_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    auto_assigned: bool,
}

impl Passenger {
    pub fn new(id: u64, name: &str, seat_type: SeatClass, seat_number: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            age: 0,
            gender: String::new(),
            nationality: String::new(),
            seat_type,
            seat_number: seat_number.map(ToString::to_string),
            parent_id: None,
            affiliated_passenger_ids: Vec::new(),
            auto_assigned: false,
        }
    }

    pub fn id(&self) -> u64 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn age(&self) -> u32 { self.age }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn nationality(&self) -> &str { &self.nationality }
    pub fn seat_type(&self) -> SeatClass { self.seat_type }
    pub fn parent_id(&self) -> Option<u64> { self.parent_id }
    pub fn affiliated_passenger_ids(&self) -> &[u64] { &self.affiliated_passenger_ids }
    pub fn is_auto_assigned(&self) -> bool { self.auto_assigned }

    /// Seat number with surrounding whitespace removed, `None` when blank.
    pub fn seat_number(&self) -> Option<&str> {
        self.seat_number.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
