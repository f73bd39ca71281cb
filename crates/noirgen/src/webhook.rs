//! Batch uploader: posts prompt rows to a Discord-style webhook.
//!
//! Each CSV row becomes one `"<prompt> <flags>"` message. Failures are
//! per-row — a rejected message is logged and the run continues, since
//! batches are cheap to re-filter and re-send.

use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::batch::CsvRow;

/// Environment variable holding the webhook URL.
pub const WEBHOOK_ENV: &str = "MJ_WEBHOOK_URL";

/// Webhook message body.
#[derive(Serialize, Debug)]
struct WebhookMessage<'a> {
    content: &'a str,
}

/// Async client for one webhook URL.
pub struct WebhookUploader {
    client: reqwest::Client,
    url: String,
}

impl WebhookUploader {
    /// Create an uploader for the given webhook URL.
    pub fn new(url: impl Into<String>) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent("noirgen/0.2")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Resolve the webhook URL from an explicit value or `MJ_WEBHOOK_URL`.
    pub fn resolve_url(explicit: Option<&str>) -> Option<String> {
        explicit
            .map(|u| u.to_string())
            .or_else(|| std::env::var(WEBHOOK_ENV).ok().filter(|u| !u.is_empty()))
    }

    /// Post one message to the webhook.
    pub async fn post(&self, content: &str) -> Result<(), String> {
        let resp = self
            .client
            .post(&self.url)
            .json(&WebhookMessage { content })
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("webhook HTTP {status}: {body}"));
        }
        Ok(())
    }
}

/// Outcome counts for an upload run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadSummary {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Compose the message for one row: `"<prompt> <flags>"`, trimmed.
pub fn row_content(row: &CsvRow) -> String {
    format!("{} {}", row.prompt.trim(), row.flags.trim())
        .trim()
        .to_string()
}

/// Upload rows to the webhook. With `dry`, messages are logged but not
/// sent and no uploader is required. Empty rows are skipped; failed
/// rows are logged and counted, not fatal.
pub async fn upload_rows(
    uploader: Option<&WebhookUploader>,
    rows: &[CsvRow],
    dry: bool,
) -> Result<UploadSummary, String> {
    let sender = if dry {
        None
    } else {
        Some(uploader.ok_or_else(|| {
            format!("no webhook URL: pass --webhook or set {WEBHOOK_ENV} (or use --dry)")
        })?)
    };

    let mut summary = UploadSummary::default();

    for row in rows {
        let content = row_content(row);
        if content.is_empty() {
            summary.skipped += 1;
            continue;
        }

        match sender {
            None => {
                info!("[DRY] ({}) {content}", row.id);
                summary.sent += 1;
            }
            Some(up) => {
                info!("[SEND] ({}) {content}", row.id);
                match up.post(&content).await {
                    Ok(()) => summary.sent += 1,
                    Err(e) => {
                        warn!("failed to send row {}: {e}", row.id);
                        summary.failed += 1;
                    }
                }
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, prompt: &str, flags: &str) -> CsvRow {
        CsvRow {
            id: id.to_string(),
            prompt: prompt.to_string(),
            flags: flags.to_string(),
        }
    }

    #[test]
    fn row_content_joins_prompt_and_flags() {
        assert_eq!(
            row_content(&row("1", "neon shrine", "--ar 3:4")),
            "neon shrine --ar 3:4"
        );
        assert_eq!(row_content(&row("2", "  bare  ", "")), "bare");
        assert_eq!(row_content(&row("3", "", "  ")), "");
    }

    #[tokio::test]
    async fn dry_run_needs_no_uploader_and_counts_rows() {
        let rows = vec![
            row("1", "first", ""),
            row("2", "", ""),
            row("3", "third", "--chaos 20"),
        ];
        let summary = upload_rows(None, &rows, true).await.unwrap();
        assert_eq!(summary.sent, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);
    }

    #[tokio::test]
    async fn live_run_without_uploader_is_an_error() {
        let err = upload_rows(None, &[], false).await.unwrap_err();
        assert!(err.contains(WEBHOOK_ENV));
    }

    #[test]
    fn resolve_url_prefers_explicit() {
        let url = WebhookUploader::resolve_url(Some("https://example.com/hook"));
        assert_eq!(url.as_deref(), Some("https://example.com/hook"));
    }
}
