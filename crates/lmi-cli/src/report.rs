//! Command handlers for the CLI.
//!
//! `parse` and `search` run a single source and dump its partial report as
//! JSON. `deep-dive` runs the full pipeline. `render` re-renders a saved
//! canonical report without touching the network.

use std::path::Path;

use anyhow::Context;
use lmi_core::{AppConfig, CanonicalReport, ReportSubject};
use lmi_report::{render, ReportTier};
use lmi_sources::{
    DeepDiveRequest, DocumentConfig, DocumentSource, SearchConfig, SearchSource, Sources,
};

pub async fn run_parse(config: &AppConfig, locator: &str) -> anyhow::Result<()> {
    let source = DocumentSource::new(&DocumentConfig::from(config))?;
    let partial = source
        .parse(locator)
        .await
        .with_context(|| format!("failed to parse document {locator}"))?;

    if !partial.failed_fields.is_empty() {
        tracing::warn!(fields = ?partial.failed_fields, "some fields could not be parsed");
    }
    println!("{}", serde_json::to_string_pretty(&partial)?);
    Ok(())
}

pub async fn run_search(
    config: &AppConfig,
    title: &str,
    location: &str,
    max_results: Option<usize>,
) -> anyhow::Result<()> {
    let mut search_config = SearchConfig::from(config);
    if let Some(max) = max_results {
        search_config.max_results = max;
    }

    let source = SearchSource::new(&search_config)?;
    let partial = source
        .collect(title, location)
        .await
        .with_context(|| format!("vacancy search failed for {title} in {location}"))?;
    println!("{}", serde_json::to_string_pretty(&partial)?);
    Ok(())
}

pub async fn run_deep_dive(
    config: &AppConfig,
    title: String,
    location: String,
    document: Option<String>,
    tier: ReportTier,
    json: bool,
) -> anyhow::Result<()> {
    let sources = Sources::from_config(config)?;
    let request = DeepDiveRequest {
        subject: ReportSubject::new(title, location),
        document,
    };

    let outcome = sources.deep_dive(&request).await;
    for failure in &outcome.failures {
        eprintln!("warning: {} unavailable: {}", failure.source, failure.error);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        let rendered = render(&outcome.report, tier);
        tracing::info!(tier = %rendered.tier, words = rendered.word_count, "rendered report");
        println!("{}", rendered.markdown);
    }
    Ok(())
}

pub fn run_render(input: &Path, tier: ReportTier) -> anyhow::Result<()> {
    println!("{}", render_file(input, tier)?);
    Ok(())
}

/// Load a canonical report from `input` and render it at `tier`.
pub(crate) fn render_file(input: &Path, tier: ReportTier) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let report: CanonicalReport = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a canonical report", input.display()))?;
    Ok(render(&report, tier).markdown)
}
