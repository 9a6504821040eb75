//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Document with a root, forward references and a shared dependency.
pub const PROJECT_DOC: &str = r#"
DOCUMENT: [app, docs]
app: [libcore, libnet]
libnet: [libcore]
libcore: []
docs: []
"#;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding the target document.
pub struct TestEnv {
  pub temp: TempDir,
  pub doc_path: PathBuf,
}

impl TestEnv {
  /// Create an environment whose document holds `content`.
  pub fn with_doc(content: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let doc_path = temp.path().join("project.yml");
    std::fs::write(&doc_path, content).unwrap();
    Self { temp, doc_path }
  }

  /// A bgraph command pointed at this environment's document.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("bgraph");
    cmd.current_dir(self.temp.path()).arg("--file").arg(&self.doc_path);
    cmd
  }

  /// Run a command with `--json` and parse its stdout.
  pub fn json(&self, args: &[&str]) -> serde_json::Value {
    let output = self.cmd().args(args).arg("--json").output().unwrap();
    assert!(
      output.status.success(),
      "command failed: {}",
      String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
  }
}
