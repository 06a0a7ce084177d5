use super::CANDIDATE_DATE_FORMAT;
use super::candidates::CrewCandidatesResponse;
use super::request_common::{HTTPRequest, HTTPRequestType};
use chrono::NaiveDateTime;

#[derive(Debug)]
pub(crate) struct CandidateCrewRequest {
    pub(crate) date: Option<NaiveDateTime>,
    pub(crate) current_flight_id: Option<String>,
}

impl From<CandidateCrewRequest> for HTTPRequest<CandidateCrewRequest> {
    fn from(value: CandidateCrewRequest) -> Self { HTTPRequest::Get(value) }
}

impl HTTPRequestType for CandidateCrewRequest {
    type Response = CrewCandidatesResponse;
    type Body = ();
    fn endpoint(&self) -> Vec<&str> { vec!["roster", "candidates", "crew"] }
    fn body(&self) -> &Self::Body { &() }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        self.date
            .map(|d| ("date", d.format(CANDIDATE_DATE_FORMAT).to_string()))
            .into_iter()
            .chain(self.current_flight_id.clone().map(|id| ("currentFlightId", id)))
            .collect()
    }
}
