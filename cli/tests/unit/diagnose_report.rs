//! Unit tests for the diagnose report.

#![allow(clippy::expect_used)]

use shadowgoose_cli::commands::diagnose::{self, DiagnoseReport};
use shadowgoose_cli::endpoints::{API_BASE_URL, WEB_BASE_URL};
use shadowgoose_cli::output::OutputContext;

use crate::fakes::FakeFetcher;

fn render_lines(report: &DiagnoseReport) -> Vec<String> {
    render_lines_with(report, false)
}

fn render_lines_with(report: &DiagnoseReport, quiet: bool) -> Vec<String> {
    let ctx = OutputContext::new(true, quiet);
    let mut buf = Vec::new();
    diagnose::render(&ctx, &mut buf, report).expect("render");
    String::from_utf8(buf)
        .expect("utf8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_endpoint_order_is_health_root_frontend() {
    let report = diagnose::collect(&FakeFetcher::new());
    let names: Vec<_> = report.endpoints.iter().map(|e| e.name).collect();
    assert_eq!(names, ["health", "root", "frontend"]);
}

#[test]
fn test_responding_endpoints_show_status_and_body() {
    let fetcher = FakeFetcher::new()
        .ok(&format!("{API_BASE_URL}/health"), 200, r#"{"status":"healthy"}"#)
        .ok(&format!("{API_BASE_URL}/"), 200, "Shadow Goose API")
        .ok(WEB_BASE_URL, 200, "<html></html>");
    let lines = render_lines(&diagnose::collect(&fetcher));
    assert!(lines.contains(&r#"✅ Health endpoint: 200"#.to_string()));
    assert!(lines.contains(&r#"   Response: {"status":"healthy"}"#.to_string()));
    assert!(lines.contains(&"✅ Root endpoint: 200".to_string()));
    assert!(lines.contains(&"✅ Frontend: 200".to_string()));
    assert!(
        !lines.iter().any(|l| l.contains("<html>")),
        "frontend body is not echoed"
    );
}

#[test]
fn test_error_status_still_counts_as_a_response() {
    let fetcher = FakeFetcher::new()
        .http_error(&format!("{API_BASE_URL}/health"), 500)
        .ok(&format!("{API_BASE_URL}/"), 200, "Shadow Goose API")
        .ok(WEB_BASE_URL, 200, "");
    let lines = render_lines(&diagnose::collect(&fetcher));
    assert!(lines.contains(&"✅ Health endpoint: 500".to_string()));
}

#[test]
fn test_unreachable_endpoint_reports_failure_reason() {
    let lines = render_lines(&diagnose::collect(&FakeFetcher::new()));
    assert!(lines.contains(&"❌ Health endpoint failed: connection refused".to_string()));
    assert!(lines.contains(&"❌ Frontend failed: connection refused".to_string()));
}

#[test]
fn test_env_analysis_and_guidance_always_render() {
    let lines = render_lines(&diagnose::collect(&FakeFetcher::new()));
    assert!(lines.iter().any(|l| l.starts_with("DATABASE_URL set: ")));
    assert!(lines.iter().any(|l| l.starts_with("SECRET_KEY set: ")));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("If new endpoints are not available, the deployment needs to be manually triggered.")
    );
}

#[test]
fn test_quiet_renders_result_lines_without_separators() {
    let fetcher = FakeFetcher::new()
        .ok(&format!("{API_BASE_URL}/health"), 200, "ok")
        .ok(&format!("{API_BASE_URL}/"), 200, "Shadow Goose API")
        .ok(WEB_BASE_URL, 200, "");
    let lines = render_lines_with(&diagnose::collect(&fetcher), true);
    assert!(
        !lines.iter().any(|l| l.contains("===")),
        "quiet output has no banners: {lines:?}"
    );
    assert!(
        !lines.iter().any(String::is_empty),
        "quiet output has no blank separator lines: {lines:?}"
    );
    assert!(lines.contains(&"✅ Health endpoint: 200".to_string()));
    assert!(lines.iter().any(|l| l.starts_with("DATABASE_URL set: ")));
}

#[test]
fn test_report_serializes_to_json_shape() {
    let report = diagnose::collect(&FakeFetcher::new());
    let value = serde_json::to_value(&report).expect("serialize");
    assert_eq!(value["endpoints"].as_array().expect("endpoints").len(), 3);
    assert!(value["env"]["database_url_set"].is_boolean());
    assert!(value["env"]["secret_key_set"].is_boolean());
    assert!(value["guidance"].is_string());
}
