//! Dense counter x bucket grid built from an observation document.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;

use crate::document::{validate_count, CounterReadings, ObservationDocument};
use crate::error::{HeatmapError, HeatmapResult};
use crate::profile::Profile;

/// Counter x bucket values in row-major order.
///
/// Rows are counter names sorted by code point, columns are the profile's
/// full bucket axis. `None` marks a cell without data.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    profile: Profile,
    rows: Vec<String>,
    cells: Vec<Option<f64>>,
    mask: Mask,
}

/// Parallel boolean grid, `true` where the grid cell has no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    cells: Vec<bool>,
}

impl Mask {
    fn from_cells(width: usize, cells: &[Option<f64>]) -> Self {
        Self {
            width,
            cells: cells.iter().map(Option::is_none).collect(),
        }
    }

    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// Mask values of one row.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Number of masked cells.
    pub fn masked_count(&self) -> usize {
        self.cells.iter().filter(|m| **m).count()
    }
}

impl Grid {
    /// Build the grid for a document.
    ///
    /// Fails with a malformed-input error when a bucket is off the axis, a
    /// bucket is reported twice for one counter, or a counter name appears
    /// both as missing and as reporting.
    pub fn build(doc: &ObservationDocument) -> HeatmapResult<Self> {
        let profile = doc.profile;
        let width = profile.bucket_count();

        let mut missing_by_name: BTreeMap<&str, bool> = BTreeMap::new();
        for record in &doc.counters {
            match missing_by_name.entry(record.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(record.is_missing());
                }
                Entry::Occupied(slot) => {
                    if *slot.get() != record.is_missing() {
                        return Err(HeatmapError::ConflictingCounter(record.name.clone()));
                    }
                }
            }
        }

        let rows: Vec<String> = missing_by_name.keys().map(|name| name.to_string()).collect();
        let mut cells: Vec<Option<f64>> = vec![None; rows.len() * width];

        for record in &doc.counters {
            let observations = match &record.readings {
                CounterReadings::Missing => continue,
                CounterReadings::Observations(observations) => observations,
            };
            // Names came from the same records, the lookup cannot miss.
            let Ok(row) = rows.binary_search_by(|name| name.as_str().cmp(&record.name)) else {
                continue;
            };

            for obs in observations {
                let col = obs.bucket.resolve(profile).ok_or_else(|| {
                    HeatmapError::BucketOutOfRange {
                        counter: record.name.clone(),
                        bucket: obs.bucket.to_string(),
                        axis: profile.axis_name(),
                    }
                })?;
                validate_count(&record.name, obs.count)?;

                let cell = &mut cells[row * width + col];
                if cell.is_some() {
                    return Err(HeatmapError::DuplicateBucket {
                        counter: record.name.clone(),
                        bucket: profile.bucket_labels()[col].to_string(),
                    });
                }
                *cell = Some(obs.count);
            }
        }

        let mask = Mask::from_cells(width, &cells);

        debug!(
            profile = %profile,
            rows = rows.len(),
            columns = width,
            masked = mask.masked_count(),
            "Built counter grid"
        );

        Ok(Self {
            profile,
            rows,
            cells,
            mask,
        })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Counter names, sorted.
    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    /// Bucket labels in canonical order.
    pub fn column_labels(&self) -> &'static [&'static str] {
        self.profile.bucket_labels()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.profile.bucket_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row * self.n_cols() + col]
    }

    /// Values of one row.
    pub fn row(&self, row: usize) -> &[Option<f64>] {
        let width = self.n_cols();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Row index of a counter name.
    pub fn row_index(&self, name: &str) -> Option<usize> {
        self.rows.binary_search_by(|row| row.as_str().cmp(name)).ok()
    }

    /// Iterate over `(row, col, value)` for every cell that holds data.
    pub fn present_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let width = self.n_cols();
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, value)| value.map(|v| (idx / width, idx % width, v)))
    }

    /// Minimum and maximum over unmasked cells, `None` when every cell is masked.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.present_cells().fold(None, |range, (_, _, v)| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BucketObservation, CounterRecord};

    fn day_doc(counters: Vec<CounterRecord>) -> ObservationDocument {
        ObservationDocument {
            profile: Profile::Day,
            label: "2024-01-01".to_string(),
            counters,
        }
    }

    #[test]
    fn test_rows_sorted_and_columns_fixed() {
        let grid = Grid::build(&day_doc(vec![
            CounterRecord::observed("B", vec![BucketObservation::hour(3, 5.0)]),
            CounterRecord::missing("A"),
        ]))
        .unwrap();

        assert_eq!(grid.row_labels(), &["A".to_string(), "B".to_string()]);
        assert_eq!(grid.n_cols(), 24);
        assert_eq!(grid.value(1, 3), Some(5.0));
        assert_eq!(grid.value(1, 4), None);
        assert!(grid.mask().row(0).iter().all(|m| *m));
        assert_eq!(grid.mask().masked_count(), 24 + 23);
    }

    #[test]
    fn test_merges_repeated_counter() {
        let grid = Grid::build(&day_doc(vec![
            CounterRecord::observed("A", vec![BucketObservation::hour(1, 1.0)]),
            CounterRecord::observed("A", vec![BucketObservation::hour(2, 2.0)]),
        ]))
        .unwrap();
        assert_eq!(grid.n_rows(), 1);
        assert_eq!(grid.value(0, 1), Some(1.0));
        assert_eq!(grid.value(0, 2), Some(2.0));
    }

    #[test]
    fn test_value_range_skips_masked() {
        let grid = Grid::build(&day_doc(vec![
            CounterRecord::observed(
                "A",
                vec![BucketObservation::hour(0, 7.0), BucketObservation::hour(1, 0.0)],
            ),
            CounterRecord::missing("B"),
        ]))
        .unwrap();
        assert_eq!(grid.value_range(), Some((0.0, 7.0)));
    }

    #[test]
    fn test_value_range_none_when_all_masked() {
        let grid = Grid::build(&day_doc(vec![CounterRecord::missing("A")])).unwrap();
        assert_eq!(grid.value_range(), None);
    }
}
