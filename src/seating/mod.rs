//! Cabin layouts, seat maps and the seat marker diagram.

pub mod plan;
mod seat_map;
mod seat_marker;


pub use plan::{BUILTIN_MODELS, CabinSection, SeatClass, SeatingPlan, SeatingPlanError};
pub use seat_map::{Seat, SeatMap, SeatRow};
pub use seat_marker::{SeatMarker, SeatMarkerBoard};
