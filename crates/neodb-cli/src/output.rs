//! Output formatting utilities.

use neodb_store::Approach;

/// Formats an approach as a simple table row.
pub fn format_table_row(approach: &Approach<'_>) -> String {
    let body = approach.body();
    let name = body.and_then(|b| b.name.as_deref()).unwrap_or("");
    let diameter = match body.and_then(|b| b.diameter()) {
        Some(diameter) => format!("{:.3}", diameter),
        None => "?".to_string(),
    };
    let hazardous = match body {
        Some(b) if b.is_hazardous => "yes",
        Some(_) => "no",
        None => "?",
    };

    format!(
        "{:<17} {:<12} {:<20} {:>12.6} {:>10.2} {:>10} {}",
        approach.time_str(),
        truncate(approach.designation().as_str(), 12),
        truncate(name, 20),
        approach.distance_au,
        approach.velocity_km_s,
        diameter,
        hazardous
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<17} {:<12} {:<20} {:>12} {:>10} {:>10} {}",
        "DATETIME_UTC", "DESIGNATION", "NAME", "DIST_AU", "VEL_KM_S", "DIAM_KM", "HAZARDOUS"
    );
    println!("{}", "-".repeat(95));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
