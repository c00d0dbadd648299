use std::path::{Path, PathBuf};

use anyhow::Context as _;

use retext::history::{self, HistoryRecord, HistorySlot};

/// Default export file name — fixed prefix, overridable with `--output`.
pub const EXPORT_FILE_NAME: &str = "retext-history.json";

const LIST_SNIPPET_CHARS: usize = 48;

fn open_slot() -> anyhow::Result<HistorySlot> {
    history::default_slot().ok_or_else(|| anyhow::anyhow!("cannot determine history slot path"))
}

fn format_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map_or_else(|| timestamp_ms.to_string(), |dt| {
            dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
        })
}

/// Char-safe one-line preview of a record's input.
fn snippet(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let head: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}\u{2026}")
}

/// Resolve a 1-based newest-first position to its record.
fn entry_at(entries: &[HistoryRecord], position: usize) -> Option<&HistoryRecord> {
    position.checked_sub(1).and_then(|i| entries.get(i))
}

pub fn cmd_history_list(limit: usize) -> anyhow::Result<i32> {
    let slot = open_slot()?;
    let entries = history::newest_first(&slot);

    if entries.is_empty() {
        eprintln!("[retext] no history entries found");
        return Ok(0);
    }

    let shown = if limit == 0 { entries.len() } else { limit };
    for (idx, entry) in entries.iter().take(shown).enumerate() {
        println!(
            "{} {} \"{}\" [{}]",
            idx + 1,
            format_timestamp(entry.timestamp_ms),
            snippet(&entry.input, LIST_SNIPPET_CHARS),
            entry.note
        );
    }
    if shown < entries.len() {
        eprintln!(
            "[retext] showing {shown} of {} entries (use -l 0 for all)",
            entries.len()
        );
    }
    Ok(0)
}

pub fn cmd_history_show(position: usize) -> anyhow::Result<i32> {
    let slot = open_slot()?;
    let entries = history::newest_first(&slot);

    let Some(entry) = entry_at(&entries, position) else {
        eprintln!("[retext] history entry {position} not found");
        return Ok(1);
    };

    println!("Timestamp: {}", format_timestamp(entry.timestamp_ms));
    println!("Input: {}", entry.input);
    println!("Note: {}", entry.note);
    println!("\n--- Output ---");
    println!("{}", entry.output);
    Ok(0)
}

pub fn cmd_history_delete(position: usize) -> anyhow::Result<i32> {
    let slot = open_slot()?;
    let entries = history::newest_first(&slot);

    let Some(entry) = entry_at(&entries, position) else {
        eprintln!("[retext] history entry {position} not found");
        return Ok(1);
    };

    let removed = history::remove(&slot, &entry.input, &entry.output, entry.timestamp_ms)?;
    if removed == 1 {
        eprintln!("[retext] removed 1 entry");
    } else {
        // An exact (input, output, timestamp) tie removes every match.
        eprintln!("[retext] removed {removed} entries");
    }
    Ok(0)
}

pub fn cmd_history_clear(yes: bool) -> anyhow::Result<i32> {
    let slot = open_slot()?;

    if !yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt("Clear local history?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            eprintln!("[retext] aborted");
            return Ok(1);
        }
    }

    history::clear(&slot)?;
    eprintln!("[retext] history cleared");
    Ok(0)
}

pub fn cmd_history_export(output: Option<&Path>) -> anyhow::Result<i32> {
    let slot = open_slot()?;
    // Export keeps the persisted (chronological) order.
    let records = slot.load();

    let json = serde_json::to_string_pretty(&records).context("serialize history")?;
    let path = output.map_or_else(|| PathBuf::from(EXPORT_FILE_NAME), Path::to_path_buf);
    std::fs::write(&path, json).with_context(|| format!("write export {}", path.display()))?;

    eprintln!(
        "[retext] exported {} entries to {}",
        records.len(),
        path.display()
    );
    Ok(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn snippet_passes_short_input_through() {
        assert_eq!(snippet("short input", 48), "short input");
    }

    #[test]
    fn snippet_flattens_internal_whitespace() {
        assert_eq!(snippet("one\n two\t three", 48), "one two three");
    }

    #[test]
    fn snippet_truncates_long_input_with_ellipsis() {
        let long = "w".repeat(100);
        let result = snippet(&long, 48);
        assert_eq!(result.chars().count(), 48);
        assert!(result.ends_with('\u{2026}'));
    }

    #[test]
    fn entry_at_is_one_based() {
        let entries = vec![
            HistoryRecord {
                input: "newest".to_owned(),
                output: String::new(),
                note: String::new(),
                timestamp_ms: 2,
            },
            HistoryRecord {
                input: "oldest".to_owned(),
                output: String::new(),
                note: String::new(),
                timestamp_ms: 1,
            },
        ];
        assert_eq!(entry_at(&entries, 1).map(|e| e.input.as_str()), Some("newest"));
        assert_eq!(entry_at(&entries, 2).map(|e| e.input.as_str()), Some("oldest"));
        assert_eq!(entry_at(&entries, 0), None);
        assert_eq!(entry_at(&entries, 3), None);
    }

    #[test]
    fn format_timestamp_renders_iso8601_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_timestamp(1_577_836_800_000), "2020-01-01T00:00:00Z");
    }
}
