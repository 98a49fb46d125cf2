//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A route table written to a temporary directory.
#[allow(dead_code)]
pub struct TableFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

/// Write `contents` to `routes.toml` in a fresh temporary directory.
pub fn write_table(contents: &str) -> TableFile {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("routes.toml");
    fs::write(&path, contents).unwrap();
    TableFile { dir, path }
}

/// Replace the contents of an existing table file.
#[allow(dead_code)]
pub fn rewrite_table(table: &TableFile, contents: &str) {
    fs::write(&table.path, contents).unwrap();
}

#[allow(dead_code)]
pub const API_TABLE: &str = r#"
[observability]
log_level = "debug"

[[routes]]
name = "home"
template = "/"
target = "home"

[[routes]]
name = "user.show"
template = "/user/{id:[0-9]+}"
target = "users"

[[routers]]
prefix = "/api/{version:v[0-9]+}"

  [[routers.routes]]
  name = "api.status"
  template = "/status"
  target = "status"

  [[routers.routers]]
  prefix = "/projects/{project}"

    [[routers.routers.routes]]
    name = "api.task"
    template = "/tasks/{task:[0-9]+}"
    target = "tasks"
"#;
