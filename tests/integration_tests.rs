//! Library-level tests for report generation
//!
//! Timestamps are fixed so every run is reproducible.

use chrono::{TimeZone, Utc};
use chrono_tz::Europe;
use pretty_assertions::assert_eq;
use spec_vs_sim::report::template;
use spec_vs_sim::validator::find_placeholders;
use spec_vs_sim::{
    generate_report, generate_report_at, CollisionPolicy, GenerateOptions, ReportError,
    Timestamp,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use test_case::test_case;

fn fixed_timestamp() -> Timestamp {
    let instant = Utc.with_ymd_and_hms(2026, 10, 16, 7, 30, 15).single().unwrap();
    Timestamp::in_zone(instant, Europe::Berlin)
}

fn options(dist: &Path, tests_passed: bool) -> GenerateOptions {
    GenerateOptions {
        tests_passed,
        dist_dir: dist.to_path_buf(),
        ..GenerateOptions::default()
    }
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    files.sort();
    files
}

#[test_case(true, "passed" ; "tests passed")]
#[test_case(false, "not recorded" ; "tests not recorded")]
fn test_status_line(tests_passed: bool, expected: &str) {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), tests_passed);
    let generated = generate_report_at(&opts, &fixed_timestamp()).unwrap();

    let content = fs::read_to_string(&generated.path).unwrap();
    let status_lines: Vec<_> = content
        .lines()
        .filter(|l| l.contains("Test status:"))
        .collect();
    assert_eq!(status_lines, vec![format!("- **Test status:** {expected}")]);
    assert_eq!(generated.test_status.to_string(), expected);
}

#[test]
fn test_output_matches_template_except_dynamic_fields() {
    let tmp = TempDir::new().unwrap();
    let generated = generate_report_at(&options(tmp.path(), true), &fixed_timestamp()).unwrap();
    let content = fs::read_to_string(&generated.path).unwrap();

    let expected = template()
        .replace("{generated}", "2026-10-16 09:30:15 CEST")
        .replace("{test_status}", "passed");
    assert_eq!(content, expected);
    assert!(find_placeholders(&content).is_empty());
    assert_eq!(generated.generated, "2026-10-16 09:30:15 CEST");
}

#[test]
fn test_missing_dist_is_created() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("nested").join("dist");
    assert!(!dist.exists());

    let generated = generate_report_at(&options(&dist, false), &fixed_timestamp()).unwrap();

    assert!(dist.is_dir());
    assert_eq!(files_in(&dist), vec![dist.join("spec-vs-sim-2026-10-16_093015.md")]);
    assert_eq!(generated.path, dist.join("spec-vs-sim-2026-10-16_093015.md"));
}

#[test]
fn test_existing_dist_is_reused() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("keep.txt"), "untouched").unwrap();

    generate_report_at(&options(tmp.path(), false), &fixed_timestamp()).unwrap();

    assert_eq!(files_in(tmp.path()).len(), 2);
    assert_eq!(fs::read_to_string(tmp.path().join("keep.txt")).unwrap(), "untouched");
}

#[test]
fn test_unwritable_dist_fails_without_creating_file() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("dist");
    fs::write(&blocker, "a regular file where the directory should be").unwrap();

    let err = generate_report_at(&options(&blocker, true), &fixed_timestamp()).unwrap_err();

    assert!(matches!(err, ReportError::CreateDir { .. }));
    assert!(err.io_error().is_some());
    assert!(blocker.is_file());
    assert_eq!(files_in(tmp.path()), vec![blocker]);
}

#[test]
fn test_failed_file_write_is_propagated() {
    let tmp = TempDir::new().unwrap();
    let occupied = tmp.path().join("spec-vs-sim-2026-10-16_093015.md");
    fs::create_dir(&occupied).unwrap();
    let mut opts = options(tmp.path(), true);
    opts.on_collision = CollisionPolicy::Overwrite;

    let err = generate_report_at(&opts, &fixed_timestamp()).unwrap_err();

    match &err {
        ReportError::Write { path, .. } => assert_eq!(path, &occupied),
        other => panic!("expected write failure, got {other}"),
    }
    assert!(err.io_error().is_some());
    assert_eq!(files_in(tmp.path()), vec![occupied]);
}

#[cfg(unix)]
#[test]
fn test_read_only_dist_fails_without_creating_file() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("locked");
    fs::create_dir(&dist).unwrap();
    fs::set_permissions(&dist, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users bypass directory permissions
    if fs::write(dist.join("canary"), "").is_ok() {
        fs::remove_file(dist.join("canary")).unwrap();
        fs::set_permissions(&dist, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = generate_report_at(&options(&dist, true), &fixed_timestamp());
    fs::set_permissions(&dist, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }));
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(std::io::ErrorKind::PermissionDenied)
    );
    assert!(files_in(&dist).is_empty());
}

#[test]
fn test_same_second_default_policy_keeps_both() {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), false);

    let first = generate_report_at(&opts, &fixed_timestamp()).unwrap();
    let second = generate_report_at(&opts, &fixed_timestamp()).unwrap();

    assert_ne!(first.path, second.path);
    assert_eq!(
        files_in(tmp.path()),
        vec![
            tmp.path().join("spec-vs-sim-2026-10-16_093015-1.md"),
            tmp.path().join("spec-vs-sim-2026-10-16_093015.md"),
        ]
    );
}

#[test]
fn test_same_second_overwrite_policy() {
    let tmp = TempDir::new().unwrap();
    let mut opts = options(tmp.path(), false);
    opts.on_collision = CollisionPolicy::Overwrite;

    let first = generate_report_at(&opts, &fixed_timestamp()).unwrap();
    opts.tests_passed = true;
    let second = generate_report_at(&opts, &fixed_timestamp()).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(files_in(tmp.path()).len(), 1);
    assert!(fs::read_to_string(&second.path).unwrap().contains("- **Test status:** passed\n"));
}

#[test]
fn test_same_second_error_policy() {
    let tmp = TempDir::new().unwrap();
    let mut opts = options(tmp.path(), false);
    opts.on_collision = CollisionPolicy::Error;

    let first = generate_report_at(&opts, &fixed_timestamp()).unwrap();
    let err = generate_report_at(&opts, &fixed_timestamp()).unwrap_err();

    match err {
        ReportError::Collision { path } => assert_eq!(path, first.path),
        other => panic!("expected collision, got {other}"),
    }
    assert_eq!(files_in(tmp.path()).len(), 1);
}

#[test]
fn test_concurrent_runs_get_distinct_files() {
    let tmp = TempDir::new().unwrap();
    let opts = Arc::new(options(&tmp.path().join("shared"), true));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let opts = Arc::clone(&opts);
            thread::spawn(move || generate_report_at(&opts, &fixed_timestamp()).unwrap().path)
        })
        .collect();

    let mut paths: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 8);
    assert_eq!(files_in(&tmp.path().join("shared")).len(), 8);
}

#[test]
fn test_generate_report_uses_current_time() {
    let tmp = TempDir::new().unwrap();
    let generated = generate_report(&options(tmp.path(), false)).unwrap();

    let name = generated.path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("spec-vs-sim-"));
    assert!(name.ends_with(".md"));
    // spec-vs-sim-YYYY-MM-DD_HHMMSS.md
    assert_eq!(name.len(), "spec-vs-sim-".len() + 17 + ".md".len());
    assert!(fs::read_to_string(&generated.path).unwrap().contains(&generated.generated));
}
