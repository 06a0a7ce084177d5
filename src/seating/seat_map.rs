use super::{SeatClass, SeatingPlan};
use crate::model::Passenger;
use std::collections::HashMap;
use std::fmt;

/// Letter used once a section runs out of configured seat letters.
const UNKNOWN_LETTER: char = '?';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: String,
    letter: char,
    class: SeatClass,
    occupant: Option<u64>,
}

impl Seat {
    pub fn id(&self) -> &str { &self.id }
    pub fn letter(&self) -> char { self.letter }
    pub fn class(&self) -> SeatClass { self.class }
    /// Passenger id sitting here, if the manifest has one.
    pub fn occupant(&self) -> Option<u64> { self.occupant }
    pub fn is_occupied(&self) -> bool { self.occupant.is_some() }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    number: u32,
    class: SeatClass,
    /// Seat groups separated by aisles.
    groups: Vec<Vec<Seat>>,
}

impl SeatRow {
    pub fn number(&self) -> u32 { self.number }
    pub fn class(&self) -> SeatClass { self.class }
    pub fn groups(&self) -> &[Vec<Seat>] { &self.groups }
    pub fn seats(&self) -> impl Iterator<Item = &Seat> { self.groups.iter().flatten() }
}

/// Cabin seat map with passenger occupancy.
///
/// Row numbers run continuously across sections, seat ids are the row number
/// followed by the seat letter (`12C`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatMap {
    rows: Vec<SeatRow>,
}

impl SeatMap {
    pub fn build(plan: &SeatingPlan, passengers: &[Passenger]) -> Self {
        let by_seat: HashMap<&str, u64> = passengers
            .iter()
            .filter_map(|p| p.seat_number().map(|seat| (seat, p.id())))
            .collect();

        let mut rows = Vec::with_capacity(plan.total_rows() as usize);
        let mut row_number = 1;
        for section in plan.sections() {
            let letters: Vec<char> = section.letters().chars().collect();
            for _ in 0..section.rows() {
                let mut letter_idx = 0usize;
                let groups: Vec<Vec<Seat>> = section
                    .layout()
                    .iter()
                    .map(|&group_size| {
                        (0..group_size)
                            .map(|_| {
                                let letter = letters.get(letter_idx).copied().unwrap_or(UNKNOWN_LETTER);
                                letter_idx += 1;
                                let id = format!("{row_number}{letter}");
                                let occupant = by_seat.get(id.as_str()).copied();
                                Seat { id, letter, class: section.class(), occupant }
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect();
                rows.push(SeatRow { number: row_number, class: section.class(), groups });
                row_number += 1;
            }
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[SeatRow] { &self.rows }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.rows.iter().flat_map(SeatRow::seats).find(|s| s.id == id)
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flat_map(SeatRow::seats).filter(|s| s.is_occupied()).count()
    }

    pub fn seat_count(&self) -> usize { self.rows.iter().flat_map(SeatRow::seats).count() }
}

impl fmt::Display for SeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let tag = match row.class {
                SeatClass::Business => 'B',
                SeatClass::Economy => ' ',
            };
            write!(f, "{tag}{:>3} ", row.number)?;
            for (i, group) in row.groups.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                for seat in group {
                    if seat.is_occupied() {
                        write!(f, "[x]")?;
                    } else {
                        write!(f, "[{}]", seat.letter)?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
