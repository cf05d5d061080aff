//! Where the demo keeps its log and config file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

fn dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "listview", "listview-demo")
}

/// Optional `config.json` in the platform config directory.
pub fn config_file() -> Option<PathBuf> {
    dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Prepare the cache directory for a new session and return the path of the
/// fresh log file.
///
/// An existing `latest.log` is archived under a timestamped name and the
/// oldest archives beyond [`MAX_OLD_LOGS`] are removed.
pub fn session_log() -> Option<PathBuf> {
    let cache = dirs()?.cache_dir().to_path_buf();
    fs::create_dir_all(&cache).ok()?;

    let latest = cache.join("latest.log");
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", timestamp)));
    }

    prune_archives(&cache);
    Some(latest)
}

fn prune_archives(cache: &Path) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut archives: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    // oldest first
    archives.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());

    let excess = archives.len().saturating_sub(MAX_OLD_LOGS);
    for entry in archives.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_keeps_newest_archives() {
        let dir = std::env::temp_dir().join(format!("listview-demo-logs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for i in 0..MAX_OLD_LOGS + 5 {
            fs::write(dir.join(format!("2024010{:02}.log", i)), "").unwrap();
        }
        fs::write(dir.join("latest.log"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        prune_archives(&dir);

        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.iter().filter(|name| name.ends_with(".log")).count(), MAX_OLD_LOGS + 1);
        assert!(names.contains(&"latest.log".to_string()));
        assert!(names.contains(&"notes.txt".to_string()));

        fs::remove_dir_all(&dir).unwrap();
    }
}
