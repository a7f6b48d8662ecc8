//! Alt-text descriptions of a rendered heatmap.

use crate::grid::Grid;
use crate::profile::Profile;

/// Describe the heatmap for screen readers.
///
/// Returns `None` when no cell holds a positive count.
pub fn describe(grid: &Grid) -> Option<String> {
    let peak = grid
        .present_cells()
        .map(|(_, _, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);
    if peak <= 0.0 {
        return None;
    }

    let profile = grid.profile();
    let (by, period) = match profile {
        Profile::Day => ("hour", "hourly"),
        Profile::Week => ("day", "daily"),
    };

    let names: Vec<&str> = grid.row_labels().iter().map(String::as_str).collect();
    let mut out = format!(
        "Heatmap of counts by {} from the {} {}.",
        by,
        human_list(&names),
        plural("counter", names.len())
    );

    let peaks: Vec<(usize, usize)> = grid
        .present_cells()
        .filter(|(_, _, v)| *v == peak)
        .map(|(row, col, _)| (row, col))
        .collect();
    let count = peak.trunc();

    if let [(row, col)] = peaks.as_slice() {
        let name = &grid.row_labels()[*row];
        let when = match profile {
            Profile::Day => format!("during the {} hour", clock_hour(*col)),
            Profile::Week => format!("on {}", profile.bucket_labels()[*col]),
        };
        out.push_str(&format!(
            " The highest {} count was {} {} from the {} counter.",
            period, count, when, name
        ));
    } else {
        let mut peak_names: Vec<&str> = peaks
            .iter()
            .map(|(row, _)| grid.row_labels()[*row].as_str())
            .collect();
        peak_names.dedup();
        out.push_str(&format!(
            " The highest {} count was {} from the {} {}.",
            period,
            count,
            human_list(&peak_names),
            plural("counter", peak_names.len())
        ));
    }

    Some(out)
}

/// Join words as an English list: `a`, `a and b`, `a, b, and c`.
pub fn human_list(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

/// 12-hour clock label of an hour of day (`12 AM`, `3 PM`).
pub fn clock_hour(hour: usize) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", h, suffix)
}

fn plural(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
