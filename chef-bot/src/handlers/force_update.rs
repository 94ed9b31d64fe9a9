use tracing::{error, instrument};

use super::MSG_WEATHER_FAILED;
use crate::core::{Responder, Result};
use crate::weather::{round_for_display, RefreshReport, WeatherRefresher};

/// One-line summary sent back after a manual refresh.
pub fn summarize_report(report: &RefreshReport) -> String {
    let mut text = format!(
        "Weather updated for {}: {:.1}°C (feels like {:.1}°C). {} channel(s) renamed",
        report.snapshot.city,
        round_for_display(report.snapshot.temperature),
        round_for_display(report.snapshot.feels_like),
        report.renamed
    );
    if report.failed > 0 {
        text.push_str(&format!(", {} failed", report.failed));
    }
    text.push('.');
    text
}

/// `force_update`: runs one refresh now, writing every channel even if unchanged.
#[instrument(skip_all)]
pub async fn handle_force_update(refresher: &WeatherRefresher, responder: &dyn Responder) -> Result<()> {
    match refresher.refresh(true).await {
        Ok(report) => responder.reply_text(&summarize_report(&report)).await,
        Err(e) => {
            error!(error = %e, "Forced weather refresh failed");
            responder.reply_text(MSG_WEATHER_FAILED).await
        }
    }
}
