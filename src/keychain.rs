use crate::config::ClientConfig;
use crate::flights::{merge_flights, normalize_flight_number};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    candidate_crew_get::CandidateCrewRequest, candidate_pilots_get::CandidatePilotsRequest,
    flights_get::FlightListRequest, generate_roster_get::GenerateRosterRequest,
    request_common::HTTPRequestType, save_roster_post::SaveRosterRequest,
};
use crate::http_handler::{HTTPError, ResponseError, RosterStore};
use crate::model::{Flight, Roster};
use crate::roster::{CandidateDirectory, Permission, RosterSession, RosterStatus, SaveError};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session context against the roster service.
///
/// Holds the HTTP client, the permission of the configured user and the
/// flight list last seen, which also contains flights created locally and
/// not saved yet.
#[derive(Debug, Clone)]
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    permission: Permission,
    /// Last known flight list.
    flights: Arc<RwLock<Vec<Flight>>>,
}

impl Keychain {
    /// # Errors
    /// Fails when the configured base URL cannot be used.
    pub fn new(config: &ClientConfig) -> Result<Self, HTTPError> {
        let client = Arc::new(HTTPClient::new(config)?);
        Ok(Self {
            client,
            permission: Permission::for_user(config.username()),
            flights: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn permission(&self) -> Permission { self.permission }

    /// Root URL of the roster service this keychain talks to.
    pub fn base_url(&self) -> &str { self.client.url() }

    /// Fetches the flight list and merges the unsaved local flights into it.
    ///
    /// When the service fails the cached list is returned instead, unless
    /// nothing is cached yet.
    pub async fn load_flights(&self) -> Result<Vec<Flight>, HTTPError> {
        let request = FlightListRequest {};
        match request.send_request(&self.client).await {
            Ok(response) => {
                let mut cache = self.flights.write().await;
                let merged = merge_flights(response.into_flights(), &cache);
                crate::info!("Loaded {} flights from {}", merged.len(), self.client.url());
                cache.clone_from(&merged);
                Ok(merged)
            }
            Err(e) => {
                let cache = self.flights.read().await;
                if cache.is_empty() {
                    Err(e)
                } else {
                    crate::warn!("Flight list unavailable ({e}), showing {} cached flights", cache.len());
                    Ok(cache.clone())
                }
            }
        }
    }

    /// Adds a locally created flight, replacing one with the same number.
    pub async fn register_flight(&self, flight: Flight) {
        let mut cache = self.flights.write().await;
        let number = normalize_flight_number(flight.flight_number());
        cache.retain(|f| normalize_flight_number(f.flight_number()) != number);
        crate::info!("Registered flight {number}");
        cache.push(flight);
    }

    async fn cached_flight(&self, flight_number: &str) -> Option<Flight> {
        let wanted = normalize_flight_number(flight_number);
        self.flights
            .read()
            .await
            .iter()
            .find(|f| normalize_flight_number(f.flight_number()) == wanted)
            .cloned()
    }

    /// Opens the saved roster of a flight, or an empty draft when the service
    /// has none.
    ///
    /// Candidate lists that cannot be fetched are left empty.
    pub async fn open_roster(&self, flight_number: &str) -> Result<RosterSession, OpenRosterError> {
        let request = GenerateRosterRequest { flight_id: flight_number.to_string() };
        let saved = match request.send_request(&self.client).await {
            Ok(saved) => saved,
            Err(HTTPError::HTTPResponseError(e)) => {
                if !matches!(e, ResponseError::NotFound) {
                    crate::warn!("Could not read roster of {flight_number} ({e}), starting a draft");
                }
                None
            }
            Err(e) => return Err(OpenRosterError::Unavailable(e)),
        };
        let (roster, status) = match saved {
            Some(roster) => (roster, RosterStatus::Saved),
            None => {
                let flight = self
                    .cached_flight(flight_number)
                    .await
                    .ok_or_else(|| OpenRosterError::UnknownFlight(flight_number.to_string()))?;
                (Roster::draft(flight), RosterStatus::Draft)
            }
        };
        crate::info!("Opened {:?} roster of {}", status, roster.flight_id());
        let directory = self.fetch_candidates(&roster).await;
        Ok(RosterSession::new(roster, status, directory, self.permission))
    }

    async fn fetch_candidates(&self, roster: &Roster) -> CandidateDirectory {
        let flight = roster.flight();
        let date = Some(flight.date_time());
        let current_flight_id = Some(roster.flight_id().to_string());
        let pilots = CandidatePilotsRequest {
            vehicle_type: flight.aircraft_name().unwrap_or("Unknown").to_string(),
            date,
            current_flight_id: current_flight_id.clone(),
        }
        .send_request(&self.client)
        .await
        .map(|r| r.into_pilots())
        .unwrap_or_else(|e| {
            crate::warn!("Pilot candidates unavailable: {e}");
            Vec::new()
        });
        let crew = CandidateCrewRequest { date, current_flight_id }
            .send_request(&self.client)
            .await
            .map(|r| r.into_crew())
            .unwrap_or_else(|e| {
                crate::warn!("Crew candidates unavailable: {e}");
                Vec::new()
            });
        CandidateDirectory::new(pilots, crew)
    }

    /// Saves the session's roster into `store` and refreshes the flight list.
    ///
    /// # Errors
    /// Nothing is sent when the session refuses to produce a payload.
    pub async fn save_roster(&self, session: &RosterSession, store: RosterStore) -> Result<String, SaveError> {
        let roster = session.save_payload()?;
        let flight_id = roster.flight_id().to_string();
        let reply = SaveRosterRequest { roster, store }.send_request(&self.client).await.map_err(|e| match e {
            HTTPError::HTTPResponseError(ResponseError::BadRequest(reason) | ResponseError::InternalServer(reason)) => {
                SaveError::Rejected(reason)
            }
            other => SaveError::Transport(other),
        })?;
        crate::info!("Roster {flight_id} saved to {store}: {reply}");
        if let Err(e) = self.load_flights().await {
            crate::warn!("Could not refresh flights after saving: {e}");
        }
        Ok(reply)
    }
}

#[derive(Debug)]
pub enum OpenRosterError {
    /// No saved roster and the flight is not in the local list either.
    UnknownFlight(String),
    Unavailable(HTTPError),
}

impl fmt::Display for OpenRosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenRosterError::UnknownFlight(id) => write!(f, "flight {id} not found in the flight list"),
            OpenRosterError::Unavailable(e) => write!(f, "could not verify roster status: {e}"),
        }
    }
}

impl std::error::Error for OpenRosterError {}

#[cfg(test)]
mod tests {
    use super::{Keychain, OpenRosterError};
    use crate::config::{ClientConfig, Credentials};
    use crate::flights::{FlightDraft, create_flight};
    use crate::roster::Permission;
    use chrono::NaiveDate;
    use std::time::Duration;

    /// Nothing listens on the discard port of the loopback interface.
    fn offline_keychain(user: &str) -> Keychain {
        let config = ClientConfig::new("http://127.0.0.1:9/api")
            .with_credentials(Credentials::new(user, "secret"))
            .with_timeout(Duration::from_millis(500));
        Keychain::new(&config).unwrap()
    }

    fn flight(number: &str) -> crate::model::Flight {
        create_flight(&FlightDraft {
            flight_number: number.to_string(),
            source: String::from("JFK"),
            destination: String::from("LAX"),
            date_time: NaiveDate::from_ymd_opt(2025, 6, 1).and_then(|d| d.and_hms_opt(8, 0, 0)),
            vehicle_type: String::from("Embraer E195"),
            distance_km: None,
        })
        .unwrap()
    }

    #[test]
    fn test_permission_from_config() {
        assert_eq!(offline_keychain("admin").permission(), Permission::Edit);
        assert_eq!(offline_keychain("viewer").permission(), Permission::ReadOnly);
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(Keychain::new(&ClientConfig::new("not a url")).is_err());
    }

    #[tokio::test]
    async fn test_flights_fall_back_to_cache() {
        let keychain = offline_keychain("admin");
        assert!(keychain.load_flights().await.is_err());
        keychain.register_flight(flight("AA10")).await;
        keychain.register_flight(flight("aa 10")).await;
        let flights = keychain.load_flights().await.unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_number(), "AA10");
    }

    #[tokio::test]
    async fn test_open_roster_offline() {
        let keychain = offline_keychain("admin");
        keychain.register_flight(flight("AA10")).await;
        assert_eq!(keychain.base_url(), "http://127.0.0.1:9/api");
        assert!(matches!(
            keychain.open_roster("AA10").await,
            Err(OpenRosterError::Unavailable(e)) if e.is_unavailable()
        ));
    }
}
