//! Common types for the counter heatmap pipeline.
//!
//! Covers everything up to the drawing step:
//! - Profiles (hourly day axis, weekday week axis)
//! - Observation document decoding
//! - Grid and mask assembly
//! - Cell annotations
//! - Layout planning
//! - Alt-text descriptions

pub mod annotation;
pub mod describe;
pub mod document;
pub mod error;
pub mod grid;
pub mod layout;
pub mod profile;

pub use annotation::{format_cell, Annotations};
pub use describe::describe;
pub use document::{BucketKey, BucketObservation, CounterReadings, CounterRecord, ObservationDocument};
pub use error::{HeatmapError, HeatmapResult};
pub use grid::{Grid, Mask};
pub use layout::{Layout, Typography, DPI};
pub use profile::{Profile, HOUR_LABELS, WEEKDAY_LABELS};
