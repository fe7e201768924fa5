use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::BootSettings;

/// Standard snapshot file names, checked in order.
const SNAPSHOT_FILENAMES: &[&str] = &[
    "gridstream.toml",
    "gridstream.yaml",
    "gridstream.yml",
    "gridstream.json",
];

/// Load a boot snapshot from the given path (any supported format).
pub fn load_settings(path: &Path) -> anyhow::Result<BootSettings> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_settings(&raw, path)
}

/// Discover and load the boot snapshot from standard locations.
///
/// Search order:
/// 1. `./gridstream.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/gridstream/gridstream.{toml,yaml,yml,json}` (user-global)
///
/// Returns `BootSettings::default()` if no snapshot file is found or the
/// file fails to parse; the live subsystem can run with an empty snapshot.
pub fn discover_and_load() -> BootSettings {
    if let Some(path) = find_snapshot_file() {
        debug!(path = %path.display(), "loading boot snapshot");
        match load_settings(&path) {
            Ok(settings) => return settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load snapshot, using empty defaults");
            },
        }
    } else {
        debug!("no boot snapshot found, using empty defaults");
    }
    BootSettings::default()
}

/// Find the first snapshot file in standard locations.
fn find_snapshot_file() -> Option<PathBuf> {
    // Project-local
    for name in SNAPSHOT_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global: ~/.config/gridstream/
    if let Some(dir) = config_dir() {
        for name in SNAPSHOT_FILENAMES {
            let p = dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/gridstream/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "gridstream").map(|d| d.config_dir().to_path_buf())
}

fn parse_settings(raw: &str, path: &Path) -> anyhow::Result<BootSettings> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported snapshot format: .{ext}"),
    }
}
