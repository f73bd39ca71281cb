//! Conversions between prompt lists, batch JSON, and Midjourney CSV.
//!
//! Three downstream formats share this module:
//!
//! - **Batch JSON** (`{"batch":[{"id":1,"prompt":"..."},...]}`) — the
//!   shape the downstream generation APIs ingest.
//! - **Midjourney CSV** (`id,prompt`) — for spreadsheet-driven batch
//!   runs. The converter accepts flexible input shapes since record
//!   files accumulate from several generators.
//! - **Uploader CSV** (`id,prompt[,flags]`) — parsed back for the
//!   webhook uploader.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ── Batch JSON ─────────────────────────────────────────────────────

/// One prompt entry in a batch file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub id: usize,
    pub prompt: String,
}

/// A batch document: `{"batch": [...]}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BatchFile {
    pub batch: Vec<BatchEntry>,
}

/// Build a batch from newline-delimited prompts. Lines are trimmed and
/// blank lines dropped; ids are 1-based.
pub fn lines_to_batch(raw: &str) -> BatchFile {
    let batch = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(idx, prompt)| BatchEntry {
            id: idx + 1,
            prompt: prompt.to_string(),
        })
        .collect();
    BatchFile { batch }
}

/// Build a batch from an in-memory prompt list. Ids are 1-based.
pub fn prompts_to_batch(prompts: &[String]) -> BatchFile {
    let batch = prompts
        .iter()
        .enumerate()
        .map(|(idx, prompt)| BatchEntry {
            id: idx + 1,
            prompt: prompt.clone(),
        })
        .collect();
    BatchFile { batch }
}

/// Write a batch as pretty JSON, creating parent directories. Returns
/// the number of entries written.
pub fn write_batch(path: &Path, batch: &BatchFile) -> Result<usize, String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create '{}': {e}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(batch)
        .map_err(|e| format!("failed to serialize batch: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
    debug!("wrote {} batch entries to {}", batch.batch.len(), path.display());
    Ok(batch.batch.len())
}

// ── Flexible prompt extraction ─────────────────────────────────────

/// Container keys tried, in order, when the input is a JSON object.
const CONTAINER_KEYS: [&str; 4] = ["prompts", "records", "items", "data"];

/// Extract prompt strings from a flexible JSON shape.
///
/// Accepts a plain array (of strings or objects keyed `prompt`, `text`,
/// or `description`), an object holding such an array under a known
/// container key, or any other value, which becomes a single row of its
/// JSON text.
pub fn extract_prompts(value: &serde_json::Value) -> Vec<String> {
    if let Some(items) = value.as_array() {
        return items.iter().map(item_to_prompt).collect();
    }

    if let Some(obj) = value.as_object() {
        for key in CONTAINER_KEYS {
            if let Some(items) = obj.get(key).and_then(|v| v.as_array()) {
                return items.iter().map(item_to_prompt).collect();
            }
        }
    }

    vec![value.to_string()]
}

fn item_to_prompt(item: &serde_json::Value) -> String {
    if let Some(s) = item.as_str() {
        return s.to_string();
    }
    if let Some(obj) = item.as_object() {
        for key in ["prompt", "text", "description"] {
            if let Some(s) = obj.get(key).and_then(|v| v.as_str()) {
                return s.to_string();
            }
        }
        return item.to_string();
    }
    match item {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── CSV ────────────────────────────────────────────────────────────

/// Render prompts as `id,prompt` CSV with doubled-quote escaping.
pub fn to_csv(prompts: &[String]) -> String {
    let mut lines = vec!["id,prompt".to_string()];
    for (idx, prompt) in prompts.iter().enumerate() {
        let escaped = prompt.replace('"', "\"\"");
        lines.push(format!("{},\"{escaped}\"", idx + 1));
    }
    lines.join("\n")
}

/// One data row of an uploader CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    pub id: String,
    pub prompt: String,
    pub flags: String,
}

/// Parse an uploader CSV: a header record naming `id` / `prompt` /
/// `flags` columns, then data records. Unknown columns are ignored.
///
/// Quoted fields may span lines — generator prompts carry embedded
/// newlines, so a record boundary is a newline outside quotes, not a
/// line of text.
pub fn parse_csv(raw: &str) -> Vec<CsvRow> {
    let mut records = parse_csv_records(raw)
        .into_iter()
        .filter(|r| r.iter().any(|f| !f.trim().is_empty()));

    let Some(headers) = records.next() else {
        return Vec::new();
    };

    records
        .map(|fields| {
            let mut row = CsvRow::default();
            for (header, field) in headers.iter().zip(fields) {
                match header.trim() {
                    "id" => row.id = field,
                    "prompt" => row.prompt = field,
                    "flags" => row.flags = field,
                    _ => {}
                }
            }
            row
        })
        .collect()
}

/// Split a CSV document into records of fields, honoring quotes, `""`
/// escapes, and newlines inside quoted fields.
fn parse_csv_records(raw: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {
                // CRLF record boundary; the '\n' arm finishes the record.
            }
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push(fields);
    }
    records
}

// ── File helpers ───────────────────────────────────────────────────

/// Read a JSON file into a `serde_json::Value`.
pub fn read_json(path: &Path) -> Result<serde_json::Value, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("failed to parse '{}': {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lines_to_batch_skips_blanks_and_numbers_from_one() {
        let batch = lines_to_batch("first\n\n  second  \n\t\nthird\n");
        assert_eq!(batch.batch.len(), 3);
        assert_eq!(batch.batch[0].id, 1);
        assert_eq!(batch.batch[1].prompt, "second");
        assert_eq!(batch.batch[2].id, 3);
    }

    #[test]
    fn batch_serializes_under_batch_key() {
        let batch = lines_to_batch("only");
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["batch"][0]["id"], 1);
        assert_eq!(json["batch"][0]["prompt"], "only");
    }

    #[test]
    fn write_batch_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/batch.json");
        let batch = lines_to_batch("a\nb");

        let written = write_batch(&path, &batch).unwrap();
        assert_eq!(written, 2);

        let back: BatchFile =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.batch, batch.batch);
    }

    #[test]
    fn extract_from_string_array() {
        let prompts = extract_prompts(&json!(["a", "b"]));
        assert_eq!(prompts, vec!["a", "b"]);
    }

    #[test]
    fn extract_from_object_array_prefers_prompt_key() {
        let prompts = extract_prompts(&json!([
            {"prompt": "p1"},
            {"text": "t2"},
            {"description": "d3"},
            {"other": "x"}
        ]));
        assert_eq!(prompts[0], "p1");
        assert_eq!(prompts[1], "t2");
        assert_eq!(prompts[2], "d3");
        assert!(prompts[3].contains("other"), "falls back to JSON text");
    }

    #[test]
    fn extract_from_container_keys() {
        for key in CONTAINER_KEYS {
            let prompts = extract_prompts(&json!({ key: ["x"] }));
            assert_eq!(prompts, vec!["x"], "container key {key}");
        }
    }

    #[test]
    fn extract_from_scalar_is_single_row() {
        let prompts = extract_prompts(&json!({"weird": true}));
        assert_eq!(prompts.len(), 1);
    }

    #[test]
    fn csv_escapes_quotes() {
        let csv = to_csv(&[r#"say "hello""#.to_string()]);
        assert_eq!(csv, "id,prompt\n1,\"say \"\"hello\"\"\"");
    }

    #[test]
    fn csv_round_trips_through_parser() {
        let prompts = vec![
            "plain prompt".to_string(),
            r#"with "quotes", and commas"#.to_string(),
        ];
        let rows = parse_csv(&to_csv(&prompts));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prompt, prompts[0]);
        assert_eq!(rows[1].prompt, prompts[1]);
        assert_eq!(rows[1].id, "2");
        assert!(rows[1].flags.is_empty());
    }

    #[test]
    fn multiline_prompts_survive_the_csv_round_trip() {
        // Generator prompts carry a World: header line, so quoted CSV
        // fields span multiple lines of text.
        let prompts = vec![
            "World: BH\nneon catechisms, fog vaults".to_string(),
            "World: BH\nMode: duet\nchrome-ink operative".to_string(),
        ];
        let rows = parse_csv(&to_csv(&prompts));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prompt, prompts[0]);
        assert_eq!(rows[1].prompt, prompts[1]);
        assert_eq!(rows[1].id, "2");
    }

    #[test]
    fn parse_csv_handles_crlf_boundaries() {
        let rows = parse_csv("id,prompt\r\n1,\"line one\nline two\"\r\n2,plain\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prompt, "line one\nline two");
        assert_eq!(rows[1].prompt, "plain");
    }

    #[test]
    fn parse_csv_reads_flags_column() {
        let rows = parse_csv("id,prompt,flags\n1,\"neon shrine\",--ar 3:4\n");
        assert_eq!(rows[0].flags, "--ar 3:4");
    }

    #[test]
    fn parse_csv_empty_input() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("id,prompt\n").is_empty());
    }

    #[test]
    fn read_json_reports_missing_file() {
        let err = read_json(Path::new("/nonexistent/bh_prompts.json")).unwrap_err();
        assert!(err.contains("failed to read"));
    }
}
