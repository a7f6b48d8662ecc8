//! Observation documents.
//!
//! The wire format is decoded with serde into private `Raw*` shapes and then
//! converted into the typed records below, so every later stage works with
//! an explicit `Missing` / `Observations` split instead of optional fields.

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::error::{HeatmapError, HeatmapResult};
use crate::profile::Profile;

/// A decoded observation document.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationDocument {
    pub profile: Profile,
    /// Free-text period label, only used in the title.
    pub label: String,
    pub counters: Vec<CounterRecord>,
}

/// One counter and what it reported.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRecord {
    pub name: String,
    pub readings: CounterReadings,
}

/// Readings of a counter over the whole period.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterReadings {
    /// The counter reported nothing for the period.
    Missing,
    /// Per-bucket counts; buckets not listed are absent.
    Observations(Vec<BucketObservation>),
}

/// A count for one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketObservation {
    pub bucket: BucketKey,
    pub count: f64,
}

/// Bucket key as written in the document. Range checks happen when the
/// key is resolved against a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketKey {
    Hour(i64),
    Weekday(String),
}

impl BucketKey {
    /// Column index on the profile's axis.
    pub fn resolve(&self, profile: Profile) -> Option<usize> {
        match self {
            BucketKey::Hour(hour) => profile.hour_index(*hour),
            BucketKey::Weekday(day) => profile.weekday_index(day),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Hour(hour) => write!(f, "{:02}", hour),
            BucketKey::Weekday(day) => write!(f, "{}", day),
        }
    }
}

impl CounterRecord {
    /// A counter with no data for the period.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readings: CounterReadings::Missing,
        }
    }

    /// A counter reporting the given observations.
    pub fn observed(name: impl Into<String>, observations: Vec<BucketObservation>) -> Self {
        Self {
            name: name.into(),
            readings: CounterReadings::Observations(observations),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.readings, CounterReadings::Missing)
    }
}

impl BucketObservation {
    pub fn hour(hour: i64, count: f64) -> Self {
        Self {
            bucket: BucketKey::Hour(hour),
            count,
        }
    }

    pub fn weekday(day: impl Into<String>, count: f64) -> Self {
        Self {
            bucket: BucketKey::Weekday(day.into()),
            count,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    day: Option<String>,
    week: Option<String>,
    #[serde(default)]
    counters: Vec<RawCounter>,
}

#[derive(Debug, Deserialize)]
struct RawCounter {
    name: String,
    #[serde(default)]
    missing: bool,
    hours: Option<Vec<RawHour>>,
    days: Option<Vec<RawWeekday>>,
}

#[derive(Debug, Deserialize)]
struct RawHour {
    hour: i64,
    count: f64,
}

#[derive(Debug, Deserialize)]
struct RawWeekday {
    day: String,
    count: f64,
}

impl ObservationDocument {
    /// Decode a document from a JSON string.
    pub fn from_json(profile: Profile, json_str: &str) -> HeatmapResult<Self> {
        let raw: RawDocument = serde_json::from_str(json_str)?;
        Self::from_raw(profile, raw)
    }

    /// Decode a document from JSON bytes.
    pub fn from_slice(profile: Profile, bytes: &[u8]) -> HeatmapResult<Self> {
        let raw: RawDocument = serde_json::from_slice(bytes)?;
        Self::from_raw(profile, raw)
    }

    fn from_raw(profile: Profile, raw: RawDocument) -> HeatmapResult<Self> {
        let label = match profile {
            Profile::Day => raw.day,
            Profile::Week => raw.week,
        }
        .unwrap_or_else(|| {
            debug!(key = profile.label_key(), "Document has no label, using default");
            profile.default_label().to_string()
        });

        let counters = raw
            .counters
            .into_iter()
            .map(|counter| convert_counter(profile, counter))
            .collect::<HeatmapResult<Vec<_>>>()?;

        debug!(
            profile = %profile,
            label = %label,
            counters = counters.len(),
            "Decoded observation document"
        );

        Ok(Self {
            profile,
            label,
            counters,
        })
    }

    /// Chart title for this document.
    pub fn title(&self) -> String {
        self.profile.title(&self.label)
    }
}

fn convert_counter(profile: Profile, raw: RawCounter) -> HeatmapResult<CounterRecord> {
    let observations = match profile {
        Profile::Day => {
            if raw.days.is_some() {
                return Err(foreign_key(profile, &raw.name, "days"));
            }
            raw.hours.map(|hours| {
                hours
                    .into_iter()
                    .map(|h| BucketObservation::hour(h.hour, h.count))
                    .collect::<Vec<_>>()
            })
        }
        Profile::Week => {
            if raw.hours.is_some() {
                return Err(foreign_key(profile, &raw.name, "hours"));
            }
            raw.days.map(|days| {
                days.into_iter()
                    .map(|d| BucketObservation::weekday(d.day, d.count))
                    .collect::<Vec<_>>()
            })
        }
    }
    .unwrap_or_default();

    if raw.missing {
        if !observations.is_empty() {
            return Err(HeatmapError::ConflictingCounter(raw.name));
        }
        return Ok(CounterRecord::missing(raw.name));
    }

    for obs in &observations {
        validate_count(&raw.name, obs.count)?;
    }

    Ok(CounterRecord::observed(raw.name, observations))
}

/// Counts must be finite and non-negative.
pub(crate) fn validate_count(counter: &str, count: f64) -> HeatmapResult<()> {
    if count.is_finite() && count >= 0.0 {
        Ok(())
    } else {
        Err(HeatmapError::NegativeCount {
            counter: counter.to_string(),
            count,
        })
    }
}

fn foreign_key(profile: Profile, counter: &str, key: &str) -> HeatmapError {
    HeatmapError::MalformedInput(format!(
        "counter '{}' uses '{}' but the {} profile expects '{}'",
        counter,
        key,
        profile,
        profile.observations_key()
    ))
}
