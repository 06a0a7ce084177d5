//! Great-circle distances between airports.

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirportInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// Airports offered when creating a flight.
pub const AIRPORTS: [AirportInfo; 8] = [
    AirportInfo { code: "IST", name: "Istanbul Airport", lat: 41.2811, lon: 28.7519 },
    AirportInfo { code: "LHR", name: "London Heathrow", lat: 51.4700, lon: -0.4543 },
    AirportInfo { code: "JFK", name: "New York JFK", lat: 40.6413, lon: -73.7781 },
    AirportInfo { code: "NRT", name: "Tokyo Narita", lat: 35.7720, lon: 140.3929 },
    AirportInfo { code: "CDG", name: "Paris Charles de Gaulle", lat: 49.0097, lon: 2.5479 },
    AirportInfo { code: "DXB", name: "Dubai International", lat: 25.2532, lon: 55.3657 },
    AirportInfo { code: "FRA", name: "Frankfurt Airport", lat: 50.0379, lon: 8.5622 },
    AirportInfo { code: "LAX", name: "Los Angeles Intl", lat: 33.9416, lon: -118.4085 },
];

pub fn airport(code: &str) -> Option<&'static AirportInfo> {
    AIRPORTS.iter().find(|a| a.code.eq_ignore_ascii_case(code.trim()))
}

/// Haversine distance in kilometres, rounded to the nearest integer.
#[allow(clippy::cast_possible_truncation)]
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    (EARTH_RADIUS_KM * c).round() as i64
}

/// Distance between two catalogue airports.
///
/// `None` when either code is unknown or both name the same airport.
pub fn distance_between(source: &str, destination: &str) -> Option<u32> {
    let src = airport(source)?;
    let dst = airport(destination)?;
    if src.code == dst.code {
        return None;
    }
    let km = great_circle_distance_km(src.lat, src.lon, dst.lat, dst.lon);
    u32::try_from(km).ok()
}

#[cfg(test)]
mod tests {
    use super::{AIRPORTS, distance_between, great_circle_distance_km};
    use itertools::Itertools;

    #[test]
    fn test_symmetric_and_zero_on_diagonal() {
        for (a, b) in AIRPORTS.iter().cartesian_product(AIRPORTS.iter()) {
            assert_eq!(
                great_circle_distance_km(a.lat, a.lon, b.lat, b.lon),
                great_circle_distance_km(b.lat, b.lon, a.lat, a.lon),
                "{} <-> {}",
                a.code,
                b.code
            );
        }
        for a in AIRPORTS {
            assert_eq!(great_circle_distance_km(a.lat, a.lon, a.lat, a.lon), 0);
        }
    }

    #[test]
    fn test_known_distances() {
        // IST-LHR is roughly 2500 km, JFK-LAX roughly 3980 km
        let ist_lhr = i64::from(distance_between("IST", "LHR").unwrap());
        assert!((2480..=2530).contains(&ist_lhr), "{ist_lhr}");
        let jfk_lax = i64::from(distance_between("jfk", "LAX").unwrap());
        assert!((3950..=4000).contains(&jfk_lax), "{jfk_lax}");
        assert_eq!(great_circle_distance_km(0.0, 0.0, 0.0, 180.0), 20015);
    }

    #[test]
    fn test_same_or_unknown_airport() {
        assert_eq!(distance_between("IST", "IST"), None);
        assert_eq!(distance_between("IST", "XXX"), None);
        assert_eq!(distance_between("", "LHR"), None);
    }
}
