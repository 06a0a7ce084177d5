use super::http_response::{candidates, flights, roster, save_roster};

pub(crate) mod candidate_crew_get;
pub(crate) mod candidate_pilots_get;
pub(crate) mod flights_get;
pub(crate) mod generate_roster_get;
pub(crate) mod request_common;
pub(crate) mod save_roster_post;

/// Format of the `date` query parameter of the candidate endpoints.
const CANDIDATE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";
