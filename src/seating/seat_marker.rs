use std::collections::HashMap;
use strum_macros::{Display, EnumIter};

/// Fill marker of a seat on the schematic cabin diagram.
///
/// Each click advances the marker one step through the cycle
/// `white -> lightgreen -> gold -> lightcoral -> white`.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, Default, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SeatMarker {
    #[default]
    White,
    LightGreen,
    Gold,
    LightCoral,
}

impl SeatMarker {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SeatMarker::White => SeatMarker::LightGreen,
            SeatMarker::LightGreen => SeatMarker::Gold,
            SeatMarker::Gold => SeatMarker::LightCoral,
            SeatMarker::LightCoral => SeatMarker::White,
        }
    }

    /// Marker that follows the given fill value. Unrecognised fills restart the
    /// cycle at white.
    pub fn after_fill(fill: Option<&str>) -> Self {
        match fill.map(SeatMarker::from_fill) {
            Some(Some(marker)) => marker.next(),
            _ => SeatMarker::White,
        }
    }

    pub fn from_fill(fill: &str) -> Option<Self> {
        match fill {
            "white" => Some(SeatMarker::White),
            "lightgreen" => Some(SeatMarker::LightGreen),
            "gold" => Some(SeatMarker::Gold),
            "lightcoral" => Some(SeatMarker::LightCoral),
            _ => None,
        }
    }
}

/// Markers of all seats clicked on a cabin diagram, keyed by seat id.
#[derive(Debug, Default, Clone)]
pub struct SeatMarkerBoard {
    fills: HashMap<String, String>,
}

impl SeatMarkerBoard {
    pub fn new() -> Self { Self::default() }

    /// Sets a raw fill value, as read from a diagram that was drawn elsewhere.
    pub fn set_fill(&mut self, seat: &str, fill: &str) {
        self.fills.insert(seat.to_string(), fill.to_string());
    }

    /// Advances the marker of `seat` and returns the new one.
    pub fn click(&mut self, seat: &str) -> SeatMarker {
        let next = SeatMarker::after_fill(self.fills.get(seat).map(String::as_str));
        self.fills.insert(seat.to_string(), next.to_string());
        next
    }

    /// Current fill of `seat`; seats never touched are unfilled.
    pub fn fill(&self, seat: &str) -> Option<&str> { self.fills.get(seat).map(String::as_str) }
}
