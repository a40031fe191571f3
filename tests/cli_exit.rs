// tests/cli_exit.rs - Exit code tests
use knotscan_core::cli::args::ScanArgs;
use knotscan_core::cli::handlers::{handle_graph, handle_scan, handle_stats};
use knotscan_core::config::Config;
use knotscan_core::exit::KnotExit;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    for (name, body) in files {
        fs::write(d.path().join(name), body).unwrap();
    }
    d
}

fn cyclic() -> TempDir {
    project(&[("a.ts", "import './b'"), ("b.ts", "import './a'")])
}

#[test]
fn test_exit_0_clean() {
    let d = project(&[("a.ts", "import './b'"), ("b.ts", "")]);
    let code = handle_scan(d.path(), &Config::new(), ScanArgs::default()).unwrap();
    assert_eq!(code, KnotExit::Success);
}

#[test]
fn test_cycles_pass_unless_denied() {
    let d = cyclic();
    let code = handle_scan(d.path(), &Config::new(), ScanArgs::default()).unwrap();
    assert_eq!(code, KnotExit::Success);

    let args = ScanArgs { deny_cycles: true, ..ScanArgs::default() };
    let code = handle_scan(d.path(), &Config::new(), args).unwrap();
    assert_eq!(code, KnotExit::CyclesFound);

    let config = Config { deny_cycles: true, ..Config::new() };
    let code = handle_scan(d.path(), &config, ScanArgs { json: true, ..ScanArgs::default() }).unwrap();
    assert_eq!(code, KnotExit::CyclesFound);
}

#[test]
fn test_missing_input_is_archive_failure() {
    let code = handle_scan(Path::new("/no/such/input.zip"), &Config::new(), ScanArgs::default()).unwrap();
    assert_eq!(code, KnotExit::ArchiveFailure);
}

#[test]
fn test_corrupt_archive_is_archive_failure() {
    let d = project(&[("broken.zip", "garbage")]);
    let code = handle_graph(&d.path().join("broken.zip"), &Config::new()).unwrap();
    assert_eq!(code, KnotExit::ArchiveFailure);
}

#[test]
fn test_no_sources_warning_code() {
    let d = project(&[("readme.md", "hello")]);
    let code = handle_stats(d.path(), &Config::new(), false).unwrap();
    assert_eq!(code, KnotExit::NoSources);
}

#[test]
fn test_strict_paths_on_directory_walk() {
    // Directory walks never yield malformed paths, so strict mode still succeeds here.
    let d = cyclic();
    let config = Config { strict_paths: true, ..Config::new() };
    let code = handle_stats(d.path(), &config, true).unwrap();
    assert_eq!(code, KnotExit::Success);
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_archive_failure() {
    use std::os::unix::fs::PermissionsExt;

    let d = project(&[("a.ts", "import './sub/b'")]);
    let sub = d.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("b.ts"), "import '../a'").unwrap();
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&sub).is_ok() {
        // Permission bits do not apply to root.
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let args = ScanArgs { deny_cycles: true, ..ScanArgs::default() };
    let code = handle_scan(d.path(), &Config::new(), args).unwrap();
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(code, KnotExit::ArchiveFailure);
}
