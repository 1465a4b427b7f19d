use crate::pairs::DistancePair;
use crate::summary::Analysis;

const HEADER: [&str; 3] = ["Place A", "Place B", "Distance in"];
const NAME_WIDTH: usize = 25;
const DISTANCE_WIDTH: usize = 15;

fn border() -> String {
    format!(
        "+{}+{}+{}+\n",
        "-".repeat(NAME_WIDTH + 1),
        "-".repeat(NAME_WIDTH + 1),
        "-".repeat(DISTANCE_WIDTH + 1)
    )
}

fn row(a: &str, b: &str, distance: &str) -> String {
    format!(
        "| {:<nw$}| {:<nw$}| {:<dw$}|\n",
        a,
        b,
        distance,
        nw = NAME_WIDTH,
        dw = DISTANCE_WIDTH
    )
}

/// Bordered table of pairs, with the unit appended to the header and to
/// every distance. An empty list still renders the header.
pub fn render_table(pairs: &[DistancePair], unit: &str) -> String {
    let border = border();
    let mut out = border.clone();
    out.push_str(&row(HEADER[0], HEADER[1], &format!("{} {}", HEADER[2], unit)));
    out.push_str(&border);
    for p in pairs {
        out.push_str(&row(&p.place_a, &p.place_b, &format!("{:.1} {}", p.distance_km, unit)));
    }
    out.push_str(&border);
    out
}

/// The line printed under the table.
pub fn render_summary(analysis: &Analysis) -> String {
    match analysis {
        Analysis::NoData => "List contains no places.".to_string(),
        Analysis::InsufficientPairs { average_km } => format!(
            "Average distance: {:.1} km. Not enough places to make a pair.",
            average_km
        ),
        Analysis::Closest(summary) => format!(
            "Average distance: {:.1} km. Closest pair: {} - {} {:.1} km",
            summary.average_km,
            summary.closest_pair.place_a,
            summary.closest_pair.place_b,
            summary.closest_pair.distance_km
        ),
    }
}
