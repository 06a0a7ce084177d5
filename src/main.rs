use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use crew_roster::config::ClientConfig;
use crew_roster::flights::{FlightDraft, create_flight, filter_flights};
use crew_roster::http_handler::{HTTPError, RosterStore};
use crew_roster::keychain::{Keychain, OpenRosterError};
use crew_roster::model::{Candidate, wire_time};
use crew_roster::roster::{Affordance, CandidateView, RosterEdits, RosterSession, SaveError};
use crew_roster::{error, fatal, geo, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "crew-roster", version)]
#[command(about = "Build and check flight crew rosters against the roster service")]
#[command(after_help = "Environment:\n  ROSTER_API_URL     Service root\n  ROSTER_USER        Basic auth user\n  ROSTER_PASSWORD    Basic auth password\n  LOG_ROSTER_EVENTS  Trace roster edits")]
struct Cli {
    /// Root URL of the roster service API.
    #[arg(long, global = true)]
    url: Option<String>,
    /// Basic auth user; without a password the empty password is sent.
    #[arg(long, global = true)]
    user: Option<String>,
    #[arg(long, global = true)]
    password: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// Selection changes, by candidate id. Removals run before additions.
#[derive(Args, Debug, Default)]
struct EditArgs {
    /// Add a pilot (repeatable).
    #[arg(long = "pilot", value_name = "ID")]
    pilots: Vec<u64>,
    /// Add a cabin crew member (repeatable).
    #[arg(long = "crew", value_name = "ID")]
    crew: Vec<u64>,
    #[arg(long = "drop-pilot", value_name = "ID")]
    drop_pilots: Vec<u64>,
    #[arg(long = "drop-crew", value_name = "ID")]
    drop_crew: Vec<u64>,
}

impl From<&EditArgs> for RosterEdits {
    fn from(value: &EditArgs) -> Self {
        RosterEdits {
            add_pilots: value.pilots.clone(),
            add_crew: value.crew.clone(),
            drop_pilots: value.drop_pilots.clone(),
            drop_crew: value.drop_crew.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the flights known to the service.
    Flights {
        /// Only flights whose number contains this text.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show the roster of a flight with its checklist, candidates and seat map.
    /// Edits are previewed, not saved.
    Roster {
        flight: String,
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Great circle distance between two catalogue airports.
    Distance { source: String, destination: String },
    /// Apply edits to the roster of a flight, validate it and save it.
    Save {
        flight: String,
        #[arg(long, default_value_t = RosterStore::Sql)]
        store: RosterStore,
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Write the roster of a flight to a JSON file.
    Export { flight: String, path: PathBuf },
    /// Create a flight and print it as JSON. With edits or `--store` its
    /// draft roster is built in the same run.
    Create {
        flight_number: String,
        source: String,
        destination: String,
        /// Departure as `YYYY-MM-DDTHH:MM`.
        #[arg(value_parser = parse_departure)]
        date_time: NaiveDateTime,
        vehicle_type: String,
        /// Save the draft roster into this store.
        #[arg(long)]
        store: Option<RosterStore>,
        #[command(flatten)]
        edits: EditArgs,
    },
}

fn parse_departure(value: &str) -> Result<NaiveDateTime, String> {
    wire_time::parse_local(value).ok_or_else(|| format!("unreadable date {value:?}"))
}

fn client_config(cli: &Cli) -> ClientConfig {
    let config = ClientConfig::from_env().with_login(cli.user.as_deref(), cli.password.as_deref());
    match &cli.url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    }
}

fn connect(cli: &Cli) -> Keychain {
    Keychain::new(&client_config(cli)).unwrap_or_else(|e| fatal!("Could not set up the roster service client: {e}"))
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match &cli.command {
        Command::Distance { source, destination } => distance(source, destination),
        Command::Create { flight_number, source, destination, date_time, vehicle_type, store, edits } => {
            let draft = FlightDraft {
                flight_number: flight_number.clone(),
                source: source.clone(),
                destination: destination.clone(),
                date_time: Some(*date_time),
                vehicle_type: vehicle_type.clone(),
                distance_km: None,
            };
            let flight = match create_flight(&draft) {
                Ok(flight) => flight,
                Err(e) => return report(&e),
            };
            match serde_json::to_string_pretty(&flight) {
                Ok(json) => println!("{json}"),
                Err(e) => return report(&e),
            }
            let edits = RosterEdits::from(edits);
            if store.is_none() && edits.is_empty() {
                return ExitCode::SUCCESS;
            }
            let keychain = connect(&cli);
            let number = flight.flight_number().to_string();
            keychain.register_flight(flight).await;
            edit_roster(&keychain, &number, &edits, *store).await
        }
        command => run_online(&connect(&cli), command).await,
    }
}

async fn run_online(keychain: &Keychain, command: &Command) -> ExitCode {
    let flights = match keychain.load_flights().await {
        Ok(flights) => flights,
        Err(e) => return report_http(keychain, &e),
    };
    match command {
        Command::Flights { filter } => {
            let shown = filter_flights(&flights, filter.as_deref().unwrap_or_default());
            for f in &shown {
                println!(
                    "{:<8} {} -> {} {} {:>6} km  {}",
                    f.flight_number(),
                    f.source().code(),
                    f.destination().code(),
                    f.date_time().format("%Y-%m-%d %H:%M"),
                    f.distance_km(),
                    f.aircraft_name().unwrap_or("Unknown"),
                );
            }
            info!("{} of {} flights shown", shown.len(), flights.len());
            ExitCode::SUCCESS
        }
        Command::Roster { flight, edits } => edit_roster(keychain, flight, &RosterEdits::from(edits), None).await,
        Command::Save { flight, store, edits } => {
            edit_roster(keychain, flight, &RosterEdits::from(edits), Some(*store)).await
        }
        Command::Export { flight, path } => {
            let result = match keychain.open_roster(flight).await {
                Ok(session) => session.export_json(path),
                Err(e) => return report_open(keychain, &e),
            };
            match result {
                Ok(()) => {
                    info!("Roster of {flight} written to {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(e) => report(&e),
            }
        }
        Command::Distance { .. } | Command::Create { .. } => ExitCode::SUCCESS,
    }
}

/// Opens the roster of `flight`, applies `edits` and either prints the result
/// or, with a store, saves it.
async fn edit_roster(keychain: &Keychain, flight: &str, edits: &RosterEdits, store: Option<RosterStore>) -> ExitCode {
    let mut session = match keychain.open_roster(flight).await {
        Ok(session) => session,
        Err(e) => return report_open(keychain, &e),
    };
    if let Err(e) = session.apply(edits) {
        return report(&e);
    }
    let Some(store) = store else {
        print_session(&session);
        return ExitCode::SUCCESS;
    };
    println!("{}", session.title());
    print_checklist(&session);
    match keychain.save_roster(&session, store).await {
        Ok(reply) => {
            info!("{reply}");
            ExitCode::SUCCESS
        }
        Err(SaveError::Transport(e)) => report_http(keychain, &e),
        Err(e) => report(&e),
    }
}

fn distance(source: &str, destination: &str) -> ExitCode {
    if let Some(km) = geo::distance_between(source, destination) {
        println!("{} -> {}: {km} km", source.to_uppercase(), destination.to_uppercase());
        ExitCode::SUCCESS
    } else {
        let unknown: Vec<&str> = [source, destination].into_iter().filter(|c| geo::airport(c).is_none()).collect();
        if unknown.is_empty() {
            warn!("Source and destination are the same airport");
        } else {
            error!("Unknown airport code(s): {}", unknown.join(", "));
        }
        ExitCode::FAILURE
    }
}

fn report(e: &dyn std::error::Error) -> ExitCode {
    error!("{e}");
    ExitCode::FAILURE
}

fn report_http(keychain: &Keychain, e: &HTTPError) -> ExitCode {
    if e.is_unavailable() {
        error!("Roster service at {} is unavailable, nothing was changed: {e}", keychain.base_url());
        ExitCode::FAILURE
    } else {
        report(e)
    }
}

fn report_open(keychain: &Keychain, e: &OpenRosterError) -> ExitCode {
    match e {
        OpenRosterError::Unavailable(http) => report_http(keychain, http),
        OpenRosterError::UnknownFlight(_) => report(e),
    }
}

fn print_candidates<C: Candidate>(heading: &str, views: &[CandidateView<'_, C>]) {
    println!("\n{heading}");
    for view in views {
        let c = view.candidate();
        let mark = match view.affordance() {
            Affordance::Addable => String::from("+"),
            Affordance::ReadOnly => String::from(" "),
            Affordance::Blocked { reason } => format!("x {reason}"),
        };
        println!("  {:>5} {:<24} {:<8} {mark}", c.id(), c.name(), c.seniority());
    }
}

fn print_checklist(session: &RosterSession) {
    println!("\nChecklist");
    for check in session.validation().checks() {
        let mark = if check.passed() { "ok" } else if check.failed() { "!!" } else { "--" };
        println!("  [{mark}] {}", check.message());
    }
}

fn print_session(session: &RosterSession) {
    println!("{}", session.title());
    println!("Aircraft: {}  Permission: {:?}", session.aircraft(), session.permission());
    print_checklist(session);
    println!("\nManifest");
    for row in session.manifest() {
        println!("  {:<10} {:>5} {:<24} {:<10} {:<12} {}", row.role, row.id, row.name, row.rank, row.nationality, row.info);
    }
    if let Some(menu) = session.menu_line() {
        println!("\nMenu: {menu}");
    }
    print_candidates("Pilot candidates", &session.pilot_candidates());
    print_candidates("Crew candidates", &session.crew_candidates());
    let seats = session.seat_map();
    if seats.is_empty() {
        warn!("No seating layout for {}", session.aircraft());
    } else {
        println!("\nSeat map ({}/{} occupied)\n{seats}", seats.occupied_count(), seats.seat_count());
    }
}
