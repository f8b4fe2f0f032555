//! `shadowgoose diagnose` — fuller deployment report.
//!
//! Per-endpoint status and body, followed by a local environment analysis
//! showing whether deployment-critical variables are set (names only, never
//! values). Like `verify`, nothing here can fail the process.

use std::io::Write;

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde::Serialize;

use crate::endpoints;
use crate::output::OutputContext;
use crate::probe::{Fetch, FetchOutcome};

use super::verify::GUIDANCE;

/// One endpoint's diagnosis.
#[derive(Debug, Serialize)]
pub struct EndpointReport {
    /// Short machine-facing name.
    pub name: &'static str,
    /// URL that was fetched.
    pub url: String,
    /// Status code, when a response was obtained (success or not).
    pub status: Option<u16>,
    /// Response body, when a response was obtained.
    pub body: Option<String>,
    /// Transport error text when no response was obtained.
    pub error: Option<String>,
    #[serde(skip)]
    title: &'static str,
    #[serde(skip)]
    show_body: bool,
}

/// Presence of deployment-critical environment variables.
#[derive(Debug, Serialize)]
pub struct EnvAnalysis {
    /// Whether `DATABASE_URL` is set locally.
    pub database_url_set: bool,
    /// Whether `SECRET_KEY` is set locally.
    pub secret_key_set: bool,
}

/// Full diagnosis output.
#[derive(Debug, Serialize)]
pub struct DiagnoseReport {
    /// Endpoint results in execution order.
    pub endpoints: Vec<EndpointReport>,
    /// Local environment analysis.
    pub env: EnvAnalysis,
    /// Static guidance line.
    pub guidance: &'static str,
}

/// Run `shadowgoose diagnose`.
///
/// # Errors
///
/// Returns an error only if output cannot be serialized or written.
pub fn run(ctx: &OutputContext, fetcher: &impl Fetch, json: bool) -> Result<()> {
    let report = collect(fetcher);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("JSON serialization")?
        );
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    render(ctx, &mut stdout, &report)
}

/// Probe the endpoints and read the local environment.
pub fn collect(fetcher: &impl Fetch) -> DiagnoseReport {
    let api = endpoints::api_base_url();
    let plan = [
        ("health", "Health endpoint", format!("{api}/health"), true),
        ("root", "Root endpoint", format!("{api}/"), true),
        ("frontend", "Frontend", endpoints::web_base_url(), false),
    ];

    let results = plan
        .into_iter()
        .map(|(name, title, url, show_body)| match fetcher.get(&url) {
            FetchOutcome::Success { status, body } | FetchOutcome::HttpError { status, body } => {
                EndpointReport {
                    name,
                    url,
                    status: Some(status),
                    body: Some(body),
                    error: None,
                    title,
                    show_body,
                }
            }
            FetchOutcome::Unreachable { reason } => EndpointReport {
                name,
                url,
                status: None,
                body: None,
                error: Some(reason),
                title,
                show_body,
            },
        })
        .collect();

    DiagnoseReport {
        endpoints: results,
        env: EnvAnalysis {
            database_url_set: std::env::var_os("DATABASE_URL").is_some(),
            secret_key_set: std::env::var_os("SECRET_KEY").is_some(),
        },
        guidance: GUIDANCE,
    }
}

/// Render the diagnosis. Section banners and their separators honor `quiet`;
/// result lines always print.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render(ctx: &OutputContext, out: &mut impl Write, report: &DiagnoseReport) -> Result<()> {
    if !ctx.quiet {
        writeln!(
            out,
            "{}",
            "=== Shadow Goose Deployment Diagnosis ===".style(ctx.styles.header)
        )?;
    }

    for endpoint in &report.endpoints {
        if let Some(status) = endpoint.status {
            writeln!(
                out,
                "{} {}: {status}",
                "✅".style(ctx.styles.success),
                endpoint.title
            )?;
            if endpoint.show_body {
                if let Some(body) = &endpoint.body {
                    writeln!(out, "   Response: {body}")?;
                }
            }
        } else {
            writeln!(
                out,
                "{} {} failed: {}",
                "❌".style(ctx.styles.error),
                endpoint.title,
                endpoint.error.as_deref().unwrap_or("no response")
            )?;
        }
    }

    if !ctx.quiet {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            "=== Environment Analysis ===".style(ctx.styles.header)
        )?;
    }
    writeln!(out, "DATABASE_URL set: {}", yes_no(report.env.database_url_set))?;
    writeln!(out, "SECRET_KEY set: {}", yes_no(report.env.secret_key_set))?;

    if !ctx.quiet {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            "=== Diagnosis Complete ===".style(ctx.styles.header)
        )?;
    }
    writeln!(out, "{}", report.guidance)?;
    Ok(())
}

fn yes_no(set: bool) -> &'static str {
    if set { "yes" } else { "no" }
}
