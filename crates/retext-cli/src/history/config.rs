/// Configuration for history retention. `None` keeps every record, matching
/// the storage model of the original slot; a value caps the list at the N
/// newest records, pruned on append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    pub retention: Option<u32>,
}

/// Private: parsed representation of a retext config file.
#[derive(serde::Deserialize, Default)]
struct RetextConfigFile {
    history: Option<HistorySection>,
}

#[derive(serde::Deserialize)]
struct HistorySection {
    retention: Option<u32>,
}

/// Read `[history] retention` from a TOML config file path. Returns `None`
/// on any error.
fn read_retention_from_config(path: &std::path::Path) -> Option<u32> {
    let content = std::fs::read_to_string(path).ok()?;
    let cfg: RetextConfigFile = toml::from_str(&content).ok()?;
    cfg.history?.retention
}

impl HistoryConfig {
    /// Load retention config using auto-detected paths. Priority:
    /// 1. `RETEXT_HISTORY_RETENTION` env var
    /// 2. `{config_dir}/retext/config.toml` `[history] retention`
    /// 3. Default: unlimited
    pub fn load() -> Self {
        let global = crate::paths::config_path();
        Self::load_from(global.as_deref())
    }

    /// Load retention config from an explicit path. Useful for testing.
    pub fn load_from(config_file: Option<&std::path::Path>) -> Self {
        let from_env = std::env::var("RETEXT_HISTORY_RETENTION")
            .ok()
            .and_then(|v| v.parse().ok());
        let from_file = config_file.and_then(read_retention_from_config);
        Self {
            retention: from_env.or(from_file),
        }
    }
}
