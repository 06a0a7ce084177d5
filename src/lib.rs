#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
//! Flight crew roster builder.
//!
//! Checks crew eligibility per aircraft type, validates staffing rules,
//! renders seat maps and talks to the roster service.

pub mod logger;

pub mod config;
pub mod flights;
pub mod geo;
pub mod http_handler;
pub mod keychain;
pub mod model;
pub mod roster;
pub mod seating;
