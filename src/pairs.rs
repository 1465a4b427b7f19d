/*
All unordered pairs of a place list with their air distance, nearest first.

Place identity is the name: two entries with the same name are treated as the
same place and never paired with each other. A duplicate name that actually
denotes a different location is therefore silently dropped from each other's
pairs, so it is logged as a warning.
*/

use fnv::FnvHashSet;
use ordered_float::OrderedFloat;

use crate::geo;

/// Stand-in partner name for the single pair produced from a one-place list.
pub const NO_PARTNER: &str = "--";

#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn distance_km(&self, other: &Place) -> f64 {
        geo::haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistancePair {
    pub place_a: String,
    pub place_b: String,
    pub distance_km: f64,
}

/// Rounds to one decimal place, the precision every distance is reported in.
///
/// Goes through the exact decimal expansion, so a value stored just below a
/// half (1.45 is really 1.4499...) rounds down.
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Builds one pair per unordered pair of differently named places, sorted
/// ascending by distance. Equal distances keep generation order (outer place
/// first, then inner).
pub fn build_pairs(places: &[Place]) -> Vec<DistancePair> {
    if let [only] = places {
        return vec![DistancePair {
            place_a: only.name.clone(),
            place_b: NO_PARTNER.to_string(),
            distance_km: 0.0,
        }];
    }

    warn_on_duplicate_names(places);

    let n = places.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in places.iter().enumerate() {
        for b in &places[i + 1..] {
            if a.name == b.name {
                continue;
            }
            pairs.push(DistancePair {
                place_a: a.name.clone(),
                place_b: b.name.clone(),
                distance_km: round_tenth(a.distance_km(b)),
            });
        }
    }

    // Stable, so ties stay in generation order.
    pairs.sort_by_key(|p| OrderedFloat(p.distance_km));
    log::debug!("{} places -> {} pairs", n, pairs.len());
    pairs
}

fn warn_on_duplicate_names(places: &[Place]) {
    let mut seen: FnvHashSet<&str> = FnvHashSet::default();
    for place in places {
        if !seen.insert(place.name.as_str()) {
            log::warn!(
                "place name {:?} appears more than once; entries sharing a name are not paired with each other",
                place.name
            );
        }
    }
}
