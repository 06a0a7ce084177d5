use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::model::Flight;

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct FlightListResponse(Vec<Flight>);

impl FlightListResponse {
    pub(crate) fn into_flights(self) -> Vec<Flight> { self.0 }
}

impl SerdeJSONBodyHTTPResponseType for FlightListResponse {}
