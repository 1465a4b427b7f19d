/*
Where the place list comes from: a `Name,Latitude,Longitude` CSV, or a batch of
randomly named places scattered uniformly over the globe.
*/

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::AirDistError;
use crate::pairs::Place;

/// Syllables random place names are assembled from.
const NAME_FRAGMENTS: &[&str] = &[
    "shi", "slarby", "fast", "knob", "le", "kle", "tje", "je", "naa", "dør", "bly", "wo", "ma",
    "plez", "zio", "gla", "yo", "que", "alber", "fi", "re", "ra", "to",
];

/// Decimal places kept on generated coordinates.
const COORD_DECIMALS: i32 = 5;

#[derive(Debug)]
pub enum PlaceSource {
    Csv(PathBuf),
    Random { count: usize, seed: u64 },
}

impl PlaceSource {
    pub fn load(&self) -> Result<Vec<Place>, AirDistError> {
        match self {
            PlaceSource::Csv(path) => read_places_file(path),
            PlaceSource::Random { count, seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                Ok(generate_places(&mut rng, *count))
            }
        }
    }
}

pub fn read_places_file(path: &Path) -> Result<Vec<Place>, AirDistError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|source| AirDistError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
    let places = parse_places(rdr)?;
    log::debug!("read {} places from {}", places.len(), path.display());
    Ok(places)
}

/// Reads places from CSV data whose first row is a header.
pub fn read_places<R: Read>(reader: R) -> Result<Vec<Place>, AirDistError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    parse_places(rdr)
}

fn parse_places<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Place>, AirDistError> {
    // No header at all means no data at all, which is reported downstream
    // as an empty list rather than an error.
    let has_header = !rdr
        .headers()
        .map_err(|e| AirDistError::InputSource {
            row: 1,
            reason: e.to_string(),
        })?
        .is_empty();

    let mut places = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Header is row 1.
        let row = i as u64 + 2;
        let record = result.map_err(|e| AirDistError::InputSource {
            row,
            reason: e.to_string(),
        })?;
        if record.len() < 3 {
            return Err(AirDistError::InputSource {
                row,
                reason: format!("expected name, latitude and longitude, found {} field(s)", record.len()),
            });
        }
        let latitude = parse_coordinate(&record[1], "latitude", row)?;
        let longitude = parse_coordinate(&record[2], "longitude", row)?;
        places.push(Place::new(&record[0], latitude, longitude));
    }

    if has_header && places.is_empty() {
        return Err(AirDistError::EmptyInput);
    }
    Ok(places)
}

fn parse_coordinate(field: &str, what: &str, row: u64) -> Result<f64, AirDistError> {
    field.parse().map_err(|_| AirDistError::InputSource {
        row,
        reason: format!("{} {:?} is not a number", what, field),
    })
}

pub fn generate_places<R: Rng>(rng: &mut R, count: usize) -> Vec<Place> {
    (0..count)
        .map(|_| {
            let name = random_name(rng);
            let latitude = round_to(rng.random_range(-90.0..=90.0), COORD_DECIMALS);
            let longitude = round_to(rng.random_range(-180.0..=180.0), COORD_DECIMALS);
            Place::new(name, latitude, longitude)
        })
        .collect()
}

fn random_name<R: Rng>(rng: &mut R) -> String {
    let fragments = rng.random_range(1..=3);
    let name: String = (0..fragments)
        .map(|_| NAME_FRAGMENTS[rng.random_range(0..NAME_FRAGMENTS.len())])
        .collect();
    capitalize(&name)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let data = "Name,Latitude,Longitude\nBerlin,52.5200,13.4050\nParis, 48.8566 , 2.3522\n";
        let places = read_places(data.as_bytes()).unwrap();
        assert_eq!(
            places,
            vec![
                Place::new("Berlin", 52.52, 13.405),
                Place::new("Paris", 48.8566, 2.3522),
            ]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = "Name,Latitude,Longitude,Country\nOslo,59.9139,10.7522,NO\n";
        let places = read_places(data.as_bytes()).unwrap();
        assert_eq!(places, vec![Place::new("Oslo", 59.9139, 10.7522)]);
    }

    #[test]
    fn non_numeric_coordinate_is_an_error() {
        let data = "Name,Latitude,Longitude\nBerlin,52.52,13.405\nParis,north,2.35\n";
        match read_places(data.as_bytes()) {
            Err(AirDistError::InputSource { row, reason }) => {
                assert_eq!(row, 3);
                assert!(reason.contains("latitude"), "{}", reason);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn short_row_is_an_error() {
        let data = "Name,Latitude,Longitude\nBerlin,52.52\n";
        assert!(matches!(
            read_places(data.as_bytes()),
            Err(AirDistError::InputSource { row: 2, .. })
        ));
    }

    #[test]
    fn header_only_is_empty_input() {
        let data = "Name,Latitude,Longitude\n";
        assert!(matches!(read_places(data.as_bytes()), Err(AirDistError::EmptyInput)));
    }

    #[test]
    fn blank_file_is_an_empty_list() {
        assert_eq!(read_places("".as_bytes()).unwrap(), Vec::new());
    }

    #[test]
    fn missing_file_is_unreadable() {
        let path = PathBuf::from("this/file/does/not/exist.csv");
        assert!(matches!(
            read_places_file(&path),
            Err(AirDistError::Unreadable { .. })
        ));
    }

    #[test]
    fn generated_places_are_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let places = generate_places(&mut rng, 200);
        assert_eq!(places.len(), 200);
        for p in &places {
            assert!((-90.0..=90.0).contains(&p.latitude), "{:?}", p);
            assert!((-180.0..=180.0).contains(&p.longitude), "{:?}", p);
            assert_eq!(p.latitude, round_to(p.latitude, COORD_DECIMALS));
            let first = p.name.chars().next().unwrap();
            assert!(first.is_uppercase(), "{:?}", p);
            assert!(p.name.chars().skip(1).all(|c| !c.is_uppercase()), "{:?}", p);
        }
    }

    #[test]
    fn same_seed_same_places() {
        let a = PlaceSource::Random { count: 25, seed: 42 }.load().unwrap();
        let b = PlaceSource::Random { count: 25, seed: 42 }.load().unwrap();
        let c = PlaceSource::Random { count: 25, seed: 43 }.load().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn capitalize_works() {
        assert_eq!(capitalize("dørshi"), "Dørshi");
        assert_eq!(capitalize("le"), "Le");
        assert_eq!(capitalize(""), "");
    }
}
