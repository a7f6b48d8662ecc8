//! Test data generators for synthetic counter documents and pixel buffers.
//!
//! All generators are seeded so a given call always produces the same
//! output, which matters for tests that compare rendered bytes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

/// Weekday abbreviations in canonical order.
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Creates an hourly document as a JSON string.
///
/// Counter names are `Counter 00`, `Counter 01`, ... listed in reverse
/// order so consumers must sort them. Roughly one counter in eight is
/// marked missing, and each reporting counter skips about a fifth of the
/// hours.
///
/// # Example
///
/// ```
/// use test_utils::generate_day_document;
///
/// let a = generate_day_document(42, 5);
/// let b = generate_day_document(42, 5);
/// assert_eq!(a, b);
/// ```
pub fn generate_day_document(seed: u64, counters: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let records: Vec<Value> = (0..counters)
        .rev()
        .map(|i| {
            let name = format!("Counter {:02}", i);
            if rng.gen_ratio(1, 8) {
                return json!({ "name": name, "missing": true });
            }
            let mut hours = Vec::new();
            for hour in 0..24 {
                if rng.gen_ratio(1, 5) {
                    continue;
                }
                hours.push(json!({ "hour": hour, "count": hourly_count(&mut rng, hour) }));
            }
            json!({ "name": name, "hours": hours })
        })
        .collect();

    json!({ "day": format!("Day {}", seed), "counters": records }).to_string()
}

/// Creates a weekly document as a JSON string.
///
/// Same conventions as [`generate_day_document`], with weekday buckets.
pub fn generate_week_document(seed: u64, counters: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let records: Vec<Value> = (0..counters)
        .rev()
        .map(|i| {
            let name = format!("Counter {:02}", i);
            if rng.gen_ratio(1, 8) {
                return json!({ "name": name, "missing": true, "days": [] });
            }
            let mut days = Vec::new();
            for day in WEEKDAYS {
                if rng.gen_ratio(1, 5) {
                    continue;
                }
                days.push(json!({ "day": day, "count": rng.gen_range(0..3000u32) }));
            }
            json!({ "name": name, "days": days })
        })
        .collect();

    json!({ "week": format!("Week {}", seed), "counters": records }).to_string()
}

/// Commuter-shaped hourly count: quiet nights, morning and evening peaks.
fn hourly_count(rng: &mut StdRng, hour: u32) -> u32 {
    let base = match hour {
        0..=5 => 2,
        7..=9 | 16..=18 => 60,
        _ => 20,
    };
    if rng.gen_ratio(1, 10) {
        0
    } else {
        rng.gen_range(0..=base)
    }
}

/// Creates a test RGBA image with a smooth gradient.
///
/// Produces more than 256 colors for images wider than 16 pixels, so it
/// exercises the RGBA encoding path.
pub fn create_test_rgba_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            let b = 128u8;
            let a = 255u8;
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }
    pixels
}

/// Creates RGBA pixel data using a handful of flat colors, like a heatmap
/// without text. Suitable for testing indexed PNG encoding.
pub fn create_flat_cell_pixels(width: usize, height: usize, cell: usize) -> Vec<u8> {
    let palette: [(u8, u8, u8); 5] = [
        (68, 1, 84),
        (59, 82, 139),
        (33, 145, 140),
        (94, 201, 98),
        (253, 231, 37),
    ];
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = palette[(x / cell + y / cell) % palette.len()];
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_document_is_deterministic() {
        assert_eq!(generate_day_document(7, 12), generate_day_document(7, 12));
        assert_ne!(generate_day_document(7, 12), generate_day_document(8, 12));
    }

    #[test]
    fn test_day_document_shape() {
        let doc: Value = serde_json::from_str(&generate_day_document(1, 4)).unwrap();
        let counters = doc["counters"].as_array().unwrap();
        assert_eq!(counters.len(), 4);
        assert_eq!(counters[0]["name"], "Counter 03");
        for counter in counters {
            if let Some(hours) = counter["hours"].as_array() {
                assert!(hours.len() <= 24);
            }
        }
    }

    #[test]
    fn test_week_document_shape() {
        let doc: Value = serde_json::from_str(&generate_week_document(3, 6)).unwrap();
        assert_eq!(doc["week"], "Week 3");
        assert_eq!(doc["counters"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_flat_cell_pixels() {
        let pixels = create_flat_cell_pixels(8, 4, 2);
        assert_eq!(pixels.len(), 8 * 4 * 4);
        assert_eq!(&pixels[0..4], &[68, 1, 84, 255]);
    }
}
