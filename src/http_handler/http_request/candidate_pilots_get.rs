use super::CANDIDATE_DATE_FORMAT;
use super::candidates::PilotCandidatesResponse;
use super::request_common::{HTTPRequest, HTTPRequestType};
use chrono::NaiveDateTime;

#[derive(Debug)]
pub(crate) struct CandidatePilotsRequest {
    pub(crate) vehicle_type: String,
    pub(crate) date: Option<NaiveDateTime>,
    pub(crate) current_flight_id: Option<String>,
}

impl From<CandidatePilotsRequest> for HTTPRequest<CandidatePilotsRequest> {
    fn from(value: CandidatePilotsRequest) -> Self { HTTPRequest::Get(value) }
}

impl HTTPRequestType for CandidatePilotsRequest {
    type Response = PilotCandidatesResponse;
    type Body = ();
    fn endpoint(&self) -> Vec<&str> { vec!["roster", "candidates", "pilots", &self.vehicle_type] }
    fn body(&self) -> &Self::Body { &() }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(date) = self.date {
            params.push(("date", date.format(CANDIDATE_DATE_FORMAT).to_string()));
        }
        if let Some(id) = &self.current_flight_id {
            params.push(("currentFlightId", id.clone()));
        }
        params
    }
}
