//! Time-axis profiles.
//!
//! A profile fixes everything that differs between the hourly and the
//! weekly heatmap: axis labels and order, cell geometry, title template
//! and the JSON keys of the input document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour buckets, in canonical order.
pub const HOUR_LABELS: [&str; 24] = [
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14",
    "15", "16", "17", "18", "19", "20", "21", "22", "23",
];

/// Weekday buckets, in canonical order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Axis configuration for one heatmap flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// 24 hourly buckets for a single day.
    Day,
    /// 7 weekday buckets for a single week.
    Week,
}

impl Profile {
    /// Column labels in canonical order.
    pub fn bucket_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Day => &HOUR_LABELS,
            Self::Week => &WEEKDAY_LABELS,
        }
    }

    /// Number of buckets on the axis (24 or 7).
    pub fn bucket_count(&self) -> usize {
        self.bucket_labels().len()
    }

    /// Edge length of one cell, in inches.
    pub fn cell_edge_inches(&self) -> f32 {
        match self {
            Self::Day => 0.6,
            Self::Week => 0.8,
        }
    }

    /// Chart title for a document label.
    pub fn title(&self, label: &str) -> String {
        match self {
            Self::Day => format!("Counts for {} by hour starting", label),
            Self::Week => format!("Counts ending {} by day", label),
        }
    }

    /// Label of the horizontal axis.
    pub fn x_axis_label(&self) -> &'static str {
        match self {
            Self::Day => "Hour",
            Self::Week => "Day",
        }
    }

    /// Label of the vertical axis.
    pub fn y_axis_label(&self) -> &'static str {
        "Counter"
    }

    /// JSON key holding the document label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }

    /// Label used when the document does not carry one.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Day => "Unknown Date",
            Self::Week => "Unknown Week",
        }
    }

    /// JSON key holding a counter's observations.
    pub fn observations_key(&self) -> &'static str {
        match self {
            Self::Day => "hours",
            Self::Week => "days",
        }
    }

    /// Name of the axis, used in diagnostics.
    pub fn axis_name(&self) -> &'static str {
        match self {
            Self::Day => "hour",
            Self::Week => "weekday",
        }
    }

    /// Column index of an hour, if the profile is hourly and the hour is in range.
    pub fn hour_index(&self, hour: i64) -> Option<usize> {
        match self {
            Self::Day if (0..24).contains(&hour) => Some(hour as usize),
            _ => None,
        }
    }

    /// Column index of a weekday abbreviation, if the profile is weekly.
    pub fn weekday_index(&self, day: &str) -> Option<usize> {
        match self {
            Self::Week => WEEKDAY_LABELS.iter().position(|d| *d == day),
            Self::Day => None,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
        }
    }
}
