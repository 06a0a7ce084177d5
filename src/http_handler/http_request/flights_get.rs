use super::flights::FlightListResponse;
use super::request_common::{HTTPRequest, HTTPRequestType};

#[derive(Debug)]
pub(crate) struct FlightListRequest {}

impl From<FlightListRequest> for HTTPRequest<FlightListRequest> {
    fn from(value: FlightListRequest) -> Self { HTTPRequest::Get(value) }
}

impl HTTPRequestType for FlightListRequest {
    type Response = FlightListResponse;
    type Body = ();
    fn endpoint(&self) -> Vec<&str> { vec!["roster", "flights"] }
    fn body(&self) -> &Self::Body { &() }
}
