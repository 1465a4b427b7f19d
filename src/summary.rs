use crate::pairs::{round_tenth, DistancePair};

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Mean of all pair distances, rounded to one decimal.
    pub average_km: f64,
    pub closest_pair: DistancePair,
}

/// What can be said about a list of pairs.
#[derive(Clone, Debug, PartialEq)]
pub enum Analysis {
    /// No pairs at all.
    NoData,
    /// The mean is not positive, e.g. a lone place or co-located places.
    /// Pairs may exist; the mean alone is reported.
    InsufficientPairs { average_km: f64 },
    Closest(Summary),
}

impl Analysis {
    pub fn average_km(&self) -> Option<f64> {
        match self {
            Analysis::NoData => None,
            Analysis::InsufficientPairs { average_km } => Some(*average_km),
            Analysis::Closest(summary) => Some(summary.average_km),
        }
    }
}

/// Averages the distances and finds the pair deviating least from that
/// average. Scans left to right, so on ties the earlier pair wins.
pub fn summarize(pairs: &[DistancePair]) -> Analysis {
    let Some(first) = pairs.first() else {
        return Analysis::NoData;
    };

    let average = pairs.iter().map(|p| p.distance_km).sum::<f64>() / pairs.len() as f64;
    // Also catches NaN.
    if !(average > 0.0) {
        return Analysis::InsufficientPairs {
            average_km: round_tenth(average),
        };
    }

    let mut closest = first;
    let mut deviation = (average - first.distance_km).abs();
    for pair in &pairs[1..] {
        let d = (average - pair.distance_km).abs();
        if d < deviation {
            deviation = d;
            closest = pair;
        }
    }
    log::debug!(
        "average {} km over {} pairs, closest deviates by {} km",
        average,
        pairs.len(),
        deviation
    );

    Analysis::Closest(Summary {
        average_km: round_tenth(average),
        closest_pair: closest.clone(),
    })
}
