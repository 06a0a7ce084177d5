use super::request_common::{HTTPRequest, HTTPRequestType};
use super::roster::GenerateRosterResponse;

#[derive(Debug)]
pub(crate) struct GenerateRosterRequest {
    pub(crate) flight_id: String,
}

impl From<GenerateRosterRequest> for HTTPRequest<GenerateRosterRequest> {
    fn from(value: GenerateRosterRequest) -> Self { HTTPRequest::Get(value) }
}

impl HTTPRequestType for GenerateRosterRequest {
    type Response = GenerateRosterResponse;
    type Body = ();
    fn endpoint(&self) -> Vec<&str> { vec!["roster", "generate", &self.flight_id] }
    fn body(&self) -> &Self::Body { &() }
}
