use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::model::{CrewMember, Pilot};

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct PilotCandidatesResponse(Vec<Pilot>);

impl PilotCandidatesResponse {
    pub(crate) fn into_pilots(self) -> Vec<Pilot> { self.0 }
}

impl SerdeJSONBodyHTTPResponseType for PilotCandidatesResponse {}

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct CrewCandidatesResponse(Vec<CrewMember>);

impl CrewCandidatesResponse {
    pub(crate) fn into_crew(self) -> Vec<CrewMember> { self.0 }
}

impl SerdeJSONBodyHTTPResponseType for CrewCandidatesResponse {}
