use samesize::cli::OptionSyntax;
use samesize::error::ExitStatus;
use samesize::output::PlainDigits;
use samesize::scanner::{LogObserver, ScanCounters, Traverser, WalkerConfig};
use samesize::{run_with, RunSettings};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn settings() -> RunSettings {
    RunSettings {
        syntax: OptionSyntax::unix(),
        digits: Box::new(PlainDigits),
    }
}

fn run(args: Vec<OsString>) -> (ExitStatus, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run_with(args, &settings(), &mut out, &mut err, LogObserver).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn canonical(path: &Path) -> String {
    fs::canonicalize(path).unwrap().display().to_string()
}

#[test]
fn test_scan_folder_with_two_same_size_files() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("A");
    fs::create_dir(&a).unwrap();
    fs::write(a.join("x.txt"), b"hello").unwrap();
    fs::write(a.join("y.txt"), b"world").unwrap();
    fs::write(a.join("z.txt"), b"123456789").unwrap();

    let (status, out) = run(vec![a.clone().into_os_string()]);

    let expected = format!(
        "\nSize 5 bytes has 2 files:\n  {}\n  {}\n\nFound 2 files with same size from 3 files in 1 folders.\n",
        canonical(&a.join("x.txt")),
        canonical(&a.join("y.txt")),
    );
    assert_eq!(out, expected);
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn test_scan_unique_sizes_prints_no_groups() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"a").unwrap();
    fs::write(dir.path().join("b.txt"), b"bb").unwrap();
    fs::write(dir.path().join("c.txt"), b"ccc").unwrap();

    let (status, out) = run(vec![dir.path().as_os_str().to_owned()]);

    assert_eq!(out, "\nFound 0 files with same size from 3 files in 1 folders.\n");
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn test_scan_nested_directories() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("subdir");
    let deeper = sub.join("deeper");
    fs::create_dir_all(&deeper).unwrap();

    fs::write(dir.path().join("top.txt"), b"same").unwrap();
    fs::write(sub.join("mid.txt"), b"size").unwrap();
    fs::write(deeper.join("low.txt"), b"four").unwrap();

    let (status, out) = run(vec![dir.path().as_os_str().to_owned()]);

    assert!(out.contains("Size 4 bytes has 3 files:"));
    assert!(out.ends_with("Found 3 files with same size from 3 files in 3 folders.\n"));
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn test_non_recursive_ignores_subfolder_files() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("top.txt"), b"12345").unwrap();
    fs::write(sub.join("a.txt"), b"abcde").unwrap();
    fs::write(sub.join("b.txt"), b"ABCDE").unwrap();

    let (_, out) = run(vec!["-s0".into(), dir.path().as_os_str().to_owned()]);

    assert!(!out.contains("bytes has"));
    assert!(!out.contains("a.txt"));
    assert!(out.ends_with("Found 0 files with same size from 1 files in 1 folders.\n"));
}

#[test]
fn test_recursion_toggle_applies_in_order() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    for root in [first.path(), second.path()] {
        let sub = root.join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("f.txt"), b"xyz").unwrap();
    }

    // First folder shallow, second folder deep
    let (_, out) = run(vec![
        "-S0".into(),
        first.path().as_os_str().to_owned(),
        "-s1".into(),
        second.path().as_os_str().to_owned(),
    ]);

    assert!(out.ends_with("Found 0 files with same size from 1 files in 3 folders.\n"));
}

#[test]
fn test_files_given_directly() {
    let dir = tempdir().unwrap();
    let one = dir.path().join("one.bin");
    let two = dir.path().join("two.bin");
    fs::write(&one, vec![0u8; 1000]).unwrap();
    fs::write(&two, vec![1u8; 1000]).unwrap();

    let (status, out) = run(vec![one.into_os_string(), two.into_os_string()]);

    assert!(out.contains("Size 1000 bytes has 2 files:"));
    assert!(out.ends_with("from 2 files in 0 folders.\n"));
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn test_same_file_listed_twice_counts_twice_lists_once() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("only.txt");
    fs::write(&file, b"data").unwrap();

    let (_, out) = run(vec![
        file.clone().into_os_string(),
        dir.path().as_os_str().to_owned(),
    ]);

    assert!(!out.contains("bytes has"));
    assert!(out.ends_with("Found 0 files with same size from 2 files in 1 folders.\n"));
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    for (name, content) in [("a", "1"), ("b", "2"), ("c", "33"), ("d", "44"), ("e", "555")] {
        fs::write(dir.path().join(name), content).unwrap();
    }

    let (_, first) = run(vec![dir.path().as_os_str().to_owned()]);
    let (_, second) = run(vec![dir.path().as_os_str().to_owned()]);

    assert_eq!(first, second);
}

#[test]
fn test_bad_option_after_paths_still_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"1").unwrap();

    let (status, out) = run(vec![dir.path().as_os_str().to_owned(), "-x".into()]);

    assert_eq!(status, ExitStatus::Failure);
    assert!(out.is_empty());
}

#[test]
fn test_traverser_counters_match_report() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("s")).unwrap();
    fs::write(dir.path().join("a"), b"12").unwrap();
    fs::write(dir.path().join("s").join("b"), b"34").unwrap();

    let mut traverser = Traverser::new(WalkerConfig::default());
    traverser.visit(dir.path());

    assert_eq!(traverser.counters(), ScanCounters { files: 2, folders: 2 });
    assert_eq!(traverser.index().collision_count(), 2);
}
