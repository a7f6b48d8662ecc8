//! Error types for the heatmap pipeline.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Input Errors ===
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Bucket '{bucket}' for counter '{counter}' is outside the {axis} axis")]
    BucketOutOfRange {
        counter: String,
        bucket: String,
        axis: &'static str,
    },

    #[error("Counter '{0}' is listed as both missing and reporting")]
    ConflictingCounter(String),

    #[error("Bucket '{bucket}' is reported more than once for counter '{counter}'")]
    DuplicateBucket { counter: String, bucket: String },

    #[error("Count {count} for counter '{counter}' must be finite and non-negative")]
    NegativeCount { counter: String, count: f64 },

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("No counters to render")]
    EmptyGrid,

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

impl HeatmapError {
    /// Coarse error category reported in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            HeatmapError::MalformedInput(_)
            | HeatmapError::BucketOutOfRange { .. }
            | HeatmapError::ConflictingCounter(_)
            | HeatmapError::DuplicateBucket { .. }
            | HeatmapError::NegativeCount { .. } => "MalformedInput",

            HeatmapError::RenderError(_) | HeatmapError::EmptyGrid => "RenderError",

            HeatmapError::Io(_) => "IoError",
        }
    }

    /// Process exit code for this error (sysexits values).
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            "MalformedInput" => 65,
            "RenderError" => 70,
            _ => 74,
        }
    }

    /// Whether the error was caused by the input document.
    pub fn is_malformed_input(&self) -> bool {
        self.category() == "MalformedInput"
    }
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::MalformedInput(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_share_category() {
        let errors = [
            HeatmapError::MalformedInput("x".to_string()),
            HeatmapError::ConflictingCounter("A".to_string()),
            HeatmapError::DuplicateBucket {
                counter: "A".to_string(),
                bucket: "03".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.category(), "MalformedInput");
            assert_eq!(err.exit_code(), 65);
            assert!(err.is_malformed_input());
        }
    }

    #[test]
    fn test_render_errors() {
        assert_eq!(HeatmapError::EmptyGrid.category(), "RenderError");
        assert_eq!(HeatmapError::RenderError("bad".into()).exit_code(), 70);
        assert!(!HeatmapError::EmptyGrid.is_malformed_input());
    }

    #[test]
    fn test_json_error_is_malformed_input() {
        let err: HeatmapError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_malformed_input());
        assert!(err.to_string().starts_with("Malformed input: JSON error"));
    }
}
