//! `shadowgoose verify` — ordered deployment smoke checks.
//!
//! Five fixed steps, executed unconditionally in order: health, root, test,
//! frontend, guidance. A failed probe prints its fallback text (or a status
//! sentinel) and the run continues; the process exits 0 either way.

use std::io::Write;

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde::Serialize;

use crate::endpoints;
use crate::output::OutputContext;
use crate::probe::{Fetch, FetchOutcome};

/// Operator guidance printed after the probes, whatever their outcomes.
pub const GUIDANCE: &str =
    "If new endpoints are not available, the deployment needs to be manually triggered.";

/// How a probe's outcome is rendered.
#[derive(Debug, Clone, Copy)]
enum Treatment {
    /// Print the response body verbatim; on failure print the fallback text,
    /// if the probe has one.
    Body(Option<&'static str>),
    /// Discard the body and print only the status code, with `000` standing
    /// in for "no response" (curl convention).
    StatusLine,
}

/// One executed probe, in execution order.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    /// Short machine-facing name.
    pub name: &'static str,
    /// URL that was fetched.
    pub url: String,
    /// Status code, when a response was obtained.
    pub status: Option<u16>,
    /// Response body, on success only.
    pub body: Option<String>,
    /// Whether the endpoint answered with a success status.
    pub ok: bool,
    #[serde(skip)]
    title: &'static str,
    #[serde(skip)]
    treatment: Treatment,
}

/// Results of the full verification sequence.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// Probe results in execution order.
    pub probes: Vec<ProbeReport>,
    /// Static guidance line.
    pub guidance: &'static str,
}

/// Run `shadowgoose verify`.
///
/// # Errors
///
/// Returns an error only if output cannot be serialized or written. Probe
/// failures always render as fallback text instead.
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

/// Execute the probe sequence. Each request fully resolves before the next
/// begins, and no outcome stops the run.
pub fn collect(fetcher: &impl Fetch) -> VerifyReport {
    let api = endpoints::api_base_url();
    let plan = [
        (
            "health",
            "Health endpoint",
            format!("{api}/health"),
            Treatment::Body(None),
        ),
        (
            "root",
            "Root endpoint",
            format!("{api}/"),
            Treatment::Body(Some("Root endpoint not available")),
        ),
        (
            "test",
            "Test endpoint",
            format!("{api}/test"),
            Treatment::Body(Some("Test endpoint not available")),
        ),
        (
            "frontend",
            "Frontend",
            endpoints::web_base_url(),
            Treatment::StatusLine,
        ),
    ];

    let probes = plan
        .into_iter()
        .map(|(name, title, url, treatment)| {
            let outcome = fetcher.get(&url);
            let ok = outcome.is_success();
            let status = outcome.status();
            let body = match outcome {
                FetchOutcome::Success { body, .. } => Some(body),
                FetchOutcome::HttpError { .. } | FetchOutcome::Unreachable { .. } => None,
            };
            ProbeReport {
                name,
                url,
                status,
                body,
                ok,
                title,
                treatment,
            }
        })
        .collect();

    VerifyReport {
        probes,
        guidance: GUIDANCE,
    }
}

/// Render the report as the fixed console sequence.
///
/// The banners and numbered step headers are decoration and honor `quiet`;
/// probe payload lines always print.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render(ctx: &OutputContext, out: &mut impl Write, report: &VerifyReport) -> Result<()> {
    if !ctx.quiet {
        writeln!(
            out,
            "{}",
            "=== Shadow Goose Deployment Test ===".style(ctx.styles.header)
        )?;
    }

    for (step, probe) in report.probes.iter().enumerate() {
        if !ctx.quiet {
            let header = format!("{}. {}:", step + 1, probe.title);
            writeln!(out, "{}", header.style(ctx.styles.dim))?;
        }
        match probe.treatment {
            Treatment::Body(fallback) => {
                if let Some(body) = &probe.body {
                    writeln!(out, "{body}")?;
                } else if let Some(text) = fallback {
                    writeln!(out, "{text}")?;
                }
            }
            Treatment::StatusLine => {
                let code = probe
                    .status
                    .map_or_else(|| "000".to_string(), |s| s.to_string());
                writeln!(out, "Frontend Status: {code}")?;
            }
        }
    }

    if !ctx.quiet {
        writeln!(out, "{}", "5. Next steps:".style(ctx.styles.dim))?;
    }
    writeln!(out, "{}", report.guidance)?;
    if !ctx.quiet {
        writeln!(
            out,
            "{}",
            "=== Deployment Test Complete ===".style(ctx.styles.header)
        )?;
    }
    Ok(())
}
