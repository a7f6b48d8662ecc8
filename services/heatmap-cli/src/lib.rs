//! Command-line glue for the heatmap renderers.
//!
//! Each binary picks a [`Profile`], reads one JSON document from stdin and
//! writes one PNG to stdout. Diagnostics go to stderr through `tracing`.

pub mod config;
pub mod logging;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use heatmap_common::{HeatmapError, ObservationDocument, Profile};
use renderer::{HeatmapRenderer, RenderedHeatmap};
use tracing::{debug, error, info};

pub use config::{CliConfig, LogFormat};
pub use logging::init_tracing;

/// Exit code for failures that carry no [`HeatmapError`].
const GENERIC_FAILURE: u8 = 1;

/// Render one document from `input` and write the PNG to `output`.
///
/// Nothing is written unless the whole image was encoded.
pub fn run<R: Read, W: Write>(
    profile: Profile,
    mut input: R,
    mut output: W,
    config: &CliConfig,
) -> Result<RenderedHeatmap> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(HeatmapError::from)
        .context("failed to read document from stdin")?;
    debug!(bytes = bytes.len(), "Read input document");

    let doc = ObservationDocument::from_slice(profile, &bytes)
        .context("failed to decode observation document")?;

    let renderer = HeatmapRenderer::new()?;
    let rendered = renderer
        .render_document(&doc)
        .with_context(|| format!("failed to render {} heatmap", profile))?;

    output
        .write_all(&rendered.png)
        .and_then(|_| output.flush())
        .map_err(HeatmapError::from)
        .context("failed to write PNG to stdout")?;

    if config.alt_text {
        match &rendered.alt_text {
            Some(text) => info!(alt_text = %text, "Alt text"),
            None => debug!("No alt text, every count is zero"),
        }
    }

    Ok(rendered)
}

/// Process exit code for a failed run.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<HeatmapError>()
        .map(HeatmapError::exit_code)
        .unwrap_or(GENERIC_FAILURE)
}

/// Shared body of the binaries, after argument parsing.
pub fn main_for(profile: Profile) -> ExitCode {
    let config = CliConfig::from_env();
    init_tracing(&config);

    match run(profile, io::stdin().lock(), io::stdout().lock(), &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code_for(&err);
            let category = err
                .downcast_ref::<HeatmapError>()
                .map(HeatmapError::category)
                .unwrap_or("Error");
            error!(category, exit_code = code, "{:#}", err);
            ExitCode::from(code)
        }
    }
}
