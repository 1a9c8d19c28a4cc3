//! Integration tests for the Healer orchestrator.
//!
//! These tests verify:
//! - Kill command issuing order and cardinality
//! - Phase ordering (kills strictly before deletions, settle delay between)
//! - Dry-run, already-clean, permission-denied, and deletion outcomes
//! - The final SUCCESS report on empty runs

mod common;

use agheal::services::SETTLE_DELAY;
use agheal::{HealSettings, Healer, Logger, PlatformKind};
use camino::Utf8PathBuf;
use common::{FakeRunner, Recorder, RecordingSink};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn temp_home() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().unwrap();
    let home = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
    (dir, home)
}

fn settings(targets: &[&str], dry_run: bool) -> HealSettings {
    HealSettings {
        target_processes: targets.iter().map(|s| s.to_string()).collect(),
        dry_run,
        debug_mode: false,
    }
}

fn build_healer(
    targets: &[&str],
    dry_run: bool,
    platform: PlatformKind,
    home: Utf8PathBuf,
    recorder: &Recorder,
) -> Healer<FakeRunner> {
    let logger = Arc::new(Logger::with_sink(Box::new(RecordingSink(recorder.clone()))));
    Healer::new(
        settings(targets, dry_run),
        platform,
        home,
        FakeRunner::new(recorder.clone()),
        logger,
    )
    .with_settle_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_one_kill_command_per_target_in_order() {
    let (_dir, home) = temp_home();
    let recorder = Recorder::default();
    // Duplicates are permitted and attempted again.
    let healer = build_healer(
        &["alpha", "beta", "alpha"],
        true,
        PlatformKind::Linux,
        home,
        &recorder,
    );

    healer.execute().await;

    let kills = recorder.entries_containing("run:");
    assert_eq!(
        kills,
        vec![
            "run:pkill -f \"alpha\"".to_string(),
            "run:pkill -f \"beta\"".to_string(),
            "run:pkill -f \"alpha\"".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_kills_strictly_precede_deletions() {
    let (_dir, home) = temp_home();
    let recorder = Recorder::default();
    let healer = build_healer(&["agent"], true, PlatformKind::Windows, home, &recorder);

    healer.execute().await;

    let entries = recorder.entries();
    let last_kill = entries
        .iter()
        .rposition(|e| e.starts_with("run:"))
        .expect("kill command issued");
    let first_delete = entries
        .iter()
        .position(|e| e.contains("[DRY RUN]"))
        .expect("delete attempt logged");
    assert!(last_kill < first_delete);
}

#[tokio::test]
async fn test_dry_run_leaves_caches_intact() {
    let (_dir, home) = temp_home();
    let cache = home.join("AppData/Roaming/Google/Antigravity/Cache");
    let gpu_cache = home.join("AppData/Roaming/Google/Antigravity/GPUCache");
    fs::create_dir_all(&cache).unwrap();
    fs::create_dir_all(&gpu_cache).unwrap();
    fs::write(cache.join("data.bin"), b"cached").unwrap();

    let recorder = Recorder::default();
    let healer = build_healer(
        &["agent"],
        true,
        PlatformKind::Windows,
        home.clone(),
        &recorder,
    );
    healer.execute().await;

    assert!(cache.exists());
    assert!(gpu_cache.exists());
    assert!(cache.join("data.bin").exists());

    // One [DRY RUN] line per resolved path, no alarming output.
    assert_eq!(recorder.entries_containing("[DRY RUN] Would delete:").len(), 2);
    assert!(recorder.entries_containing("[WARN]").is_empty());
    assert!(recorder.entries_containing("[ERROR]").is_empty());

    let last = recorder.entries().pop().unwrap();
    assert!(last.contains("[SUCCESS]"));
    assert!(last.contains("Maintenance complete"));
}

#[tokio::test]
async fn test_existing_cache_is_removed() {
    let (_dir, home) = temp_home();
    let cache = home.join(".config/google-antigravity/Cache");
    fs::create_dir_all(cache.join("nested")).unwrap();
    fs::write(cache.join("nested/blob"), b"gpu shader").unwrap();

    let recorder = Recorder::default();
    let healer = build_healer(&[], false, PlatformKind::Linux, home, &recorder);
    healer.execute().await;

    assert!(!cache.exists());
    let cleared = recorder.entries_containing("Cleared Cache:");
    assert_eq!(cleared.len(), 1);
    assert!(cleared[0].contains("[SUCCESS]"));
}

#[tokio::test]
async fn test_missing_cache_is_already_clean() {
    let (_dir, home) = temp_home();
    let recorder = Recorder::default();
    let healer = build_healer(&[], false, PlatformKind::Linux, home, &recorder);

    healer.execute().await;

    let clean = recorder.entries_containing("Path already clean:");
    assert_eq!(clean.len(), 1);
    assert!(clean[0].contains("[INFO]"));
    assert!(recorder.entries_containing("[ERROR]").is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_permission_denied_reports_and_continues() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, home) = temp_home();
    let base = home.join("AppData/Roaming/Google/Antigravity");
    let cache = base.join("Cache");
    let gpu_cache = base.join("GPUCache");
    fs::create_dir_all(&cache).unwrap();
    fs::create_dir_all(&gpu_cache).unwrap();
    fs::write(cache.join("locked.bin"), b"cached").unwrap();

    // Read-only directory: entries cannot be unlinked.
    fs::set_permissions(&cache, fs::Permissions::from_mode(0o555)).unwrap();

    // Running as root bypasses directory permissions; nothing to test then.
    if fs::write(cache.join("probe"), b"x").is_ok() {
        fs::set_permissions(&cache, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let recorder = Recorder::default();
    let healer = build_healer(&[], false, PlatformKind::Windows, home.clone(), &recorder);
    healer.execute().await;

    fs::set_permissions(&cache, fs::Permissions::from_mode(0o755)).unwrap();

    let denied = recorder.entries_containing("Permission denied for:");
    assert_eq!(denied.len(), 1);
    assert!(denied[0].contains("[ERROR]"));
    assert!(denied[0].contains("Try running as Admin/Sudo."));

    // The run continued to the next path.
    assert!(!gpu_cache.exists());
    assert_eq!(recorder.entries_containing("Cleared Cache:").len(), 1);

    let last = recorder.entries().pop().unwrap();
    assert!(last.contains("Maintenance complete"));
}

#[tokio::test]
async fn test_empty_run_still_reports_success() {
    let (_dir, home) = temp_home();
    let recorder = Recorder::default();
    let healer = build_healer(&[], false, PlatformKind::Linux, home, &recorder);

    healer.execute().await;

    let entries = recorder.entries();
    assert!(entries.iter().any(|e| e.contains("Process cleanup routine finished.")));
    let last = entries.last().unwrap();
    assert!(last.contains("[SUCCESS]"));
    assert!(last.contains("Maintenance complete"));
}

#[tokio::test(start_paused = true)]
async fn test_settle_delay_separates_phases() {
    use agheal::console::LogSink;
    use agheal::services::CommandRunner;
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[derive(Clone, Default)]
    struct TimedRecorder(Arc<Mutex<Vec<(String, Instant)>>>);

    impl TimedRecorder {
        fn record(&self, what: impl Into<String>) {
            self.0.lock().unwrap().push((what.into(), Instant::now()));
        }
    }

    struct TimedSink(TimedRecorder);
    impl LogSink for TimedSink {
        fn write_line(&mut self, line: &str) {
            self.0.record(line);
        }
    }

    struct TimedRunner(TimedRecorder);
    impl CommandRunner for TimedRunner {
        async fn run(&self, command: &str) -> bool {
            self.0.record(format!("run:{command}"));
            true
        }
    }

    let (_dir, home) = temp_home();
    let recorder = TimedRecorder::default();
    let logger = Arc::new(Logger::with_sink(Box::new(TimedSink(recorder.clone()))));
    // Default settle delay, virtual time.
    let healer = Healer::new(
        settings(&["agent"], true),
        PlatformKind::Linux,
        home,
        TimedRunner(recorder.clone()),
        logger,
    );

    healer.execute().await;

    let events = recorder.0.lock().unwrap();
    let last_kill = events
        .iter()
        .filter(|(what, _)| what.starts_with("run:"))
        .map(|(_, at)| *at)
        .last()
        .expect("kill command issued");
    let first_delete = events
        .iter()
        .find(|(what, _)| what.contains("[DRY RUN]"))
        .map(|(_, at)| *at)
        .expect("delete attempt logged");

    assert!(first_delete.duration_since(last_kill) >= SETTLE_DELAY);
}
