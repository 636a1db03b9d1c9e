use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("cuecheck").expect("cuecheck binary")
    }

    /// Write a cue sheet with the standard two-line preamble and a
    /// `#Channel,#Cue,Label` header; `rows` land on physical lines 4+.
    pub fn sheet(&self, name: &str, rows: &[&str]) -> PathBuf {
        self.sheet_with_header(name, "#Channel,#Cue,Label", rows)
    }

    pub fn sheet_with_header(&self, name: &str, header: &str, rows: &[&str]) -> PathBuf {
        let mut content = String::from("Cue Sheet Export\nConsole v2.1\n");
        content.push_str(header);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        self.raw_file(name, &content)
    }

    pub fn raw_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).expect("write fixture sheet");
        path
    }

    /// Run the binary over `files` and return captured stdout.
    pub fn run(&self, files: &[&PathBuf]) -> String {
        let out = self
            .cmd()
            .args(files.iter().map(|p| p.as_os_str()))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 report")
    }
}
