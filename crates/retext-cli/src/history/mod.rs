pub mod config;
mod store;
mod types;

pub use config::HistoryConfig;
pub use store::HistorySlot;
pub use types::HistoryRecord;

use crate::paths;

/// Returns the slot bound to the configured history path, or `None` when no
/// user directory can be determined.
pub fn default_slot() -> Option<HistorySlot> {
    paths::history_path().map(HistorySlot::new)
}

/// Current wall-clock time as epoch milliseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis().min(i64::MAX as u128) as i64)
}

/// Append `record` to the slot and persist, applying the retention cap when
/// one is configured (oldest records pruned first).
///
/// # Errors
/// Returns an error if the save fails.
pub fn append(
    slot: &HistorySlot,
    record: HistoryRecord,
    config: &HistoryConfig,
) -> anyhow::Result<()> {
    let mut records = slot.load();
    records.push(record);
    if let Some(keep) = config.retention {
        let keep = usize::try_from(keep).unwrap_or(usize::MAX);
        if records.len() > keep {
            let excess = records.len() - keep;
            records.drain(..excess);
        }
    }
    slot.save(&records)
}

/// Remove every record matching the (input, output, timestamp) triple
/// exactly and persist the remainder. Returns how many were removed.
///
/// Millisecond timestamps make full-triple ties unlikely but not
/// impossible; ties are removed together, as documented.
///
/// # Errors
/// Returns an error if the save fails.
pub fn remove(
    slot: &HistorySlot,
    input: &str,
    output: &str,
    timestamp_ms: i64,
) -> anyhow::Result<usize> {
    let mut records = slot.load();
    let before = records.len();
    records.retain(|r| !r.matches(input, output, timestamp_ms));
    let removed = before - records.len();
    if removed > 0 {
        slot.save(&records)?;
    }
    Ok(removed)
}

/// A reversed copy of the persisted list (newest first). The persisted
/// order is untouched.
pub fn newest_first(slot: &HistorySlot) -> Vec<HistoryRecord> {
    let mut records = slot.load();
    records.reverse();
    records
}

/// Persist an empty list.
///
/// # Errors
/// Returns an error if the save fails.
pub fn clear(slot: &HistorySlot) -> anyhow::Result<()> {
    slot.save(&[])
}

/// Record a transform result to history, swallowing errors unless
/// `RETEXT_DEBUG` is set. Used on the run path, where a full history slot
/// or read-only disk must not disturb the rendered result.
pub fn try_append(record: HistoryRecord) {
    let Some(slot) = default_slot() else {
        return;
    };
    let config = HistoryConfig::load();
    if let Err(e) = append(&slot, record, &config)
        && std::env::var("RETEXT_DEBUG").is_ok()
    {
        eprintln!("[retext] history error (append): {e:#}");
    }
}
