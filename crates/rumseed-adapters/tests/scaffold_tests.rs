//! Integration tests: `ScaffoldService` wired to the real adapters.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use rumseed_adapters::{FixedClock, LocalFilesystem, MemoryFilesystem};
use rumseed_core::{
    application::ApplicationError,
    domain::DefaultConfig,
    prelude::*,
};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn demo() -> ProjectName {
    ProjectName::new("demo").unwrap()
}

fn ignore(_: &ScaffoldStep) {}

#[test]
fn memory_scaffold_produces_full_layout() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(FixedClock::new(at(8, 0, 0))));

    let root = service
        .create_project_structure(&demo(), "/tmp", &ignore)
        .unwrap();
    assert_eq!(root, PathBuf::from("/tmp/demo"));

    for dir in ["", "config", "data", "output", "logs"] {
        assert!(fs.exists(&root.join(dir)), "missing directory {dir:?}");
    }
    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("/tmp/demo/README.md"),
            PathBuf::from("/tmp/demo/config/settings.json"),
        ]
    );

    let settings = fs.read_file(&root.join("config/settings.json")).unwrap();
    let parsed: DefaultConfig = serde_json::from_str(&settings).unwrap();
    assert_eq!(parsed.project, "demo");
    assert_eq!(parsed.version, "1.0.0");
    assert_eq!(parsed.settings.max_workers, 4);
    assert_eq!(parsed.created, "2026-10-18 08:00:00");
}

#[test]
fn rerun_regenerates_timestamp_and_keeps_layout() {
    let fs = MemoryFilesystem::new();

    let first = ScaffoldService::new(Box::new(fs.clone()), Box::new(FixedClock::new(at(8, 0, 0))));
    first.create_project_structure(&demo(), "/tmp", &ignore).unwrap();
    let dirs_before = fs.list_directories();

    let second = ScaffoldService::new(Box::new(fs.clone()), Box::new(FixedClock::new(at(9, 15, 0))));
    let steps = RefCell::new(Vec::new());
    let record = |step: &ScaffoldStep| steps.borrow_mut().push(step.clone());
    second.create_project_structure(&demo(), "/tmp", &record).unwrap();

    assert_eq!(fs.list_directories(), dirs_before);
    assert_eq!(fs.list_files().len(), 2);

    let settings = fs
        .read_file(Path::new("/tmp/demo/config/settings.json"))
        .unwrap();
    assert!(settings.contains("\"created\": \"2026-10-18 09:15:00\""));

    assert!(steps.borrow().iter().all(|step| match step {
        ScaffoldStep::Directory { existed, .. } => *existed,
        _ => true,
    }));
}

#[test]
fn denied_output_root_fails_before_any_file() {
    let fs = MemoryFilesystem::new();
    fs.deny_writes_under("/locked");
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(FixedClock::new(at(8, 0, 0))));

    let err = service
        .create_project_structure(&demo(), "/locked", &ignore)
        .unwrap_err();

    assert!(matches!(
        err,
        RumseedError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn local_scaffold_writes_real_files() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FixedClock::new(at(12, 34, 56))),
    );

    let root = service
        .create_project_structure(&demo(), tmp.path(), &ignore)
        .unwrap();
    assert_eq!(root, tmp.path().join("demo"));

    for sub in Subdirectory::ALL {
        assert!(root.join(sub.dir_name()).is_dir());
    }

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));
    assert!(readme.contains("- logs/ - Application logs"));

    let settings = std::fs::read_to_string(root.join("config").join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&settings).unwrap();
    assert_eq!(json["created"], "2026-10-18 12:34:56");
    assert_eq!(json["settings"]["debug"], false);
    assert_eq!(json["settings"]["verbose"], true);
}

#[test]
fn local_rerun_preserves_user_data() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FixedClock::new(at(12, 0, 0))),
    );

    let root = service
        .create_project_structure(&demo(), tmp.path(), &ignore)
        .unwrap();
    std::fs::write(root.join("data").join("events.ndjson"), "{}\n").unwrap();
    std::fs::write(root.join("README.md"), "edited by hand").unwrap();

    service
        .create_project_structure(&demo(), tmp.path(), &ignore)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(root.join("data").join("events.ndjson")).unwrap(),
        "{}\n"
    );
    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));
}
