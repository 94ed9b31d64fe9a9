//! init_tracing creates the log directory and writes events to the file.

use chef_bot::init_tracing;
use tempfile::TempDir;

#[test]
fn init_tracing_creates_parent_dir_and_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("chef-bot.log");
    let path_str = path.to_str().unwrap();

    init_tracing(path_str).unwrap();
    tracing::warn!(city = "Toronto", "logger smoke test");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("logger smoke test"));
    assert!(contents.contains("Toronto"));

    assert!(init_tracing(path_str).is_err(), "global subscriber is set only once");
}
