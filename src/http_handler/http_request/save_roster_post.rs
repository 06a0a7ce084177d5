use super::request_common::{HTTPRequest, HTTPRequestType, json_content_header};
use super::save_roster::SaveRosterResponse;
use crate::http_handler::common::RosterStore;
use crate::model::Roster;

#[derive(Debug)]
pub(crate) struct SaveRosterRequest {
    pub(crate) roster: Roster,
    pub(crate) store: RosterStore,
}

impl From<SaveRosterRequest> for HTTPRequest<SaveRosterRequest> {
    fn from(value: SaveRosterRequest) -> Self { HTTPRequest::Post(value) }
}

impl HTTPRequestType for SaveRosterRequest {
    type Response = SaveRosterResponse;
    type Body = Roster;
    fn endpoint(&self) -> Vec<&str> { vec!["roster", "save"] }
    fn body(&self) -> &Self::Body { &self.roster }
    fn query_params(&self) -> Vec<(&'static str, String)> { vec![("dbType", self.store.to_string())] }
    fn header_params(&self) -> reqwest::header::HeaderMap { json_content_header() }
}
