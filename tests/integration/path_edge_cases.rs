use samesize::scanner::{ScanObserver, Traverser, WalkerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[derive(Debug, Default)]
struct Diagnostics {
    folders: Vec<PathBuf>,
    protected: Vec<PathBuf>,
    ignored: Vec<PathBuf>,
    not_file_or_folder: Vec<PathBuf>,
    loops: Vec<(PathBuf, PathBuf)>,
}

impl ScanObserver for Diagnostics {
    fn on_folder(&mut self, path: &Path) {
        self.folders.push(path.to_path_buf());
    }

    fn on_protected_folder(&mut self, path: &Path) {
        self.protected.push(path.to_path_buf());
    }

    fn on_ignored_subfolder(&mut self, path: &Path) {
        self.ignored.push(path.to_path_buf());
    }

    fn on_not_file_or_folder(&mut self, path: &Path) {
        self.not_file_or_folder.push(path.to_path_buf());
    }

    fn on_symlink_loop(&mut self, path: &Path, ancestor: &Path) {
        self.loops.push((path.to_path_buf(), ancestor.to_path_buf()));
    }
}

fn traverser() -> Traverser<Diagnostics> {
    Traverser::with_observer(WalkerConfig::default(), Diagnostics::default())
}

#[test]
fn test_unicode_and_space_file_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("café menu.txt"), b"abc").unwrap();
    fs::write(dir.path().join("日本語.txt"), b"def").unwrap();

    let mut t = traverser();
    t.visit(dir.path());

    let group = t.index().collision_groups().next().unwrap();
    let names: Vec<_> = group
        .paths()
        .map(|p| Path::new(p).file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["café menu.txt", "日本語.txt"]);
}

#[test]
fn test_relative_paths_are_reported_absolute() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"12").unwrap();
    fs::write(dir.path().join("b.txt"), b"34").unwrap();

    // A path with a `..` detour resolves to the same canonical files
    let detour = dir.path().join("sub");
    fs::create_dir(&detour).unwrap();

    let mut t = traverser();
    t.visit(&detour.join("..").join("a.txt"));
    t.visit(&dir.path().join("b.txt"));

    let group = t.index().collision_groups().next().unwrap();
    for path in group.paths() {
        let path = Path::new(path);
        assert!(path.is_absolute());
        assert!(!path.components().any(|c| c.as_os_str() == ".."));
    }
}

#[test]
fn test_missing_target_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let mut t = traverser();
    t.visit(&missing);

    assert_eq!(t.observer().not_file_or_folder, vec![missing]);
    assert!(!t.counters().found_anything());
}

#[test]
fn test_empty_files_share_size_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("e1"), b"").unwrap();
    fs::write(dir.path().join("e2"), b"").unwrap();

    let mut t = traverser();
    t.visit(dir.path());

    let group = t.index().collision_groups().next().unwrap();
    assert_eq!(group.size, 0);
    assert_eq!(group.len(), 2);
}

#[test]
fn test_non_recursive_reports_ignored_subfolders() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("one")).unwrap();
    fs::create_dir(dir.path().join("two")).unwrap();

    let mut t = Traverser::with_observer(
        WalkerConfig::default().with_recursive(false),
        Diagnostics::default(),
    );
    t.visit(dir.path());

    assert_eq!(
        t.observer().ignored,
        vec![dir.path().join("one"), dir.path().join("two")]
    );
    assert_eq!(t.observer().folders, vec![dir.path().to_path_buf()]);
    assert_eq!(t.counters().folders, 1);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_terminates() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = a.join("b");
    fs::create_dir_all(&b).unwrap();
    fs::write(b.join("f.txt"), b"loop").unwrap();
    symlink(&a, b.join("up")).unwrap();

    let mut t = traverser();
    t.visit(dir.path());

    assert_eq!(t.observer().loops.len(), 1);
    assert_eq!(t.observer().loops[0].0, b.join("up"));
    assert_eq!(t.counters().files, 1);
    assert_eq!(t.counters().folders, 3);
}

#[cfg(unix)]
#[test]
fn test_symlink_to_sibling_folder_is_followed() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let real = dir.path().join("real");
    fs::create_dir(&real).unwrap();
    fs::write(real.join("f.txt"), b"data").unwrap();
    symlink(&real, dir.path().join("alias")).unwrap();

    let mut t = traverser();
    t.visit(dir.path());

    // Both routes are scanned, but the canonical path is indexed once
    assert!(t.observer().loops.is_empty());
    assert_eq!(t.counters().files, 2);
    assert_eq!(t.counters().folders, 3);
    assert_eq!(t.index().path_count(), 1);
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_silently_ignored() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();

    let mut t = traverser();
    t.visit(dir.path());

    assert!(t.observer().not_file_or_folder.is_empty());
    assert!(t.observer().protected.is_empty());
    assert_eq!(t.counters().files, 0);
}

#[cfg(unix)]
#[test]
fn test_special_files_are_silently_ignored() {
    use std::os::unix::net::UnixListener;

    let dir = tempdir().unwrap();
    let _listener = UnixListener::bind(dir.path().join("sock")).unwrap();
    fs::write(dir.path().join("plain.txt"), b"x").unwrap();

    let mut t = traverser();
    t.visit(dir.path());

    assert_eq!(t.counters().files, 1);
    assert!(t.observer().not_file_or_folder.is_empty());
}

#[cfg(unix)]
#[test]
fn test_special_file_given_directly_is_reported() {
    use std::os::unix::net::UnixListener;

    let dir = tempdir().unwrap();
    let sock = dir.path().join("sock");
    let _listener = UnixListener::bind(&sock).unwrap();

    let mut t = traverser();
    t.visit(&sock);

    assert_eq!(t.observer().not_file_or_folder, vec![sock]);
}

#[cfg(unix)]
#[test]
fn test_protected_folder_is_treated_as_empty() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret.txt"), b"12345").unwrap();
    fs::write(dir.path().join("open.txt"), b"12345").unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can list the folder anyway
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut t = traverser();
    t.visit(dir.path());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(t.observer().protected, vec![locked.clone()]);
    assert!(t.observer().folders.contains(&locked));
    assert_eq!(t.counters().files, 1);
    assert_eq!(t.counters().folders, 2);
    assert_eq!(t.index().collision_groups().count(), 0);
}
