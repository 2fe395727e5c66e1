//! Plain-text rendering of the presenter state.

use std::fmt::Write;

use time::{
    OffsetDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use super::state::{PresenterState, SubmitResult};

/// Page title shown in the header.
pub const TITLE: &str = "GROKLORD Fullstack Application";
/// Subtitle shown under the title.
pub const SUBTITLE: &str = "Deployed with Jenkins CI/CD & Render.com";

const DISPLAY_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Render the whole view for `state`.
pub fn render(state: &PresenterState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🚀 {TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    out.push('\n');

    let _ = writeln!(out, "## API Health Status");
    match state.health() {
        Some(health) => {
            let _ = writeln!(out, "✅ {}", health.status);
            let _ = writeln!(out, "{}", health.message);
            let _ = writeln!(out, "Time: {}", display_time(&health.timestamp));
        }
        None => {
            let _ = writeln!(out, "Checking...");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "## Backend Message");
    match state.message() {
        Some(greeting) => {
            let _ = writeln!(out, "{}", greeting.message);
            let _ = writeln!(out, "Environment: {}", greeting.environment);
        }
        None => {
            let _ = writeln!(out, "Loading...");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "## Send Data to Backend");
    let _ = writeln!(out, "Name: {}", state.form().name);
    let _ = writeln!(out, "Message: {}", state.form().message);
    let button = if state.loading() { "Sending..." } else { "Submit" };
    let _ = writeln!(out, "[{button}]");

    match state.submit_result() {
        Some(SubmitResult::Succeeded(echo)) => {
            let _ = writeln!(out, "✅ Success!");
            let _ = writeln!(out, "Name: {}", echo.received.name);
            let _ = writeln!(out, "Message: {}", echo.received.message);
            let _ = writeln!(out, "Time: {}", display_time(&echo.received.timestamp));
        }
        Some(SubmitResult::Failed { error }) => {
            let _ = writeln!(out, "❌ Error: {error}");
        }
        None => {}
    }

    out
}

/// Human-readable form of an ISO-8601 timestamp; unparsable input is shown as-is.
fn display_time(timestamp: &str) -> String {
    OffsetDateTime::parse(timestamp, &Rfc3339)
        .ok()
        .and_then(|time| time.to_offset(UtcOffset::UTC).format(DISPLAY_TIME).ok())
        .unwrap_or_else(|| timestamp.to_string())
}
