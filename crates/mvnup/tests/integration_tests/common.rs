use camino::Utf8PathBuf;
use camino_tempfile_ext::camino_tempfile::Utf8TempDir;
use std::{collections::HashMap, process::Command};

pub struct MvnupTest {
    pub temp_dir: Utf8TempDir,
    pub cwd: Utf8PathBuf,
    pub env: HashMap<String, String>,
}

impl MvnupTest {
    pub fn new() -> Self {
        let temp_dir = Utf8TempDir::new().expect("Failed to create temporary directory");
        let cwd = temp_dir.path().into();

        Self {
            temp_dir,
            cwd,
            env: HashMap::new(),
        }
    }

    pub fn mvnup(&self, args: &[&str]) -> MvnupOutput {
        let mut cmd = self.mvnup_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute mvnup command");
        MvnupOutput::new(self.temp_dir.path().as_str(), output)
    }

    pub fn mvnup_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mvnup"));
        cmd.current_dir(&self.cwd);
        cmd.env_clear().envs(&self.env);
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.cwd.join(name);
        fs_err::write(&path, contents).expect("Failed to write file");
        path
    }
}

pub struct MvnupOutput {
    pub output: std::process::Output,
    pub test_root: String,
}

impl MvnupOutput {
    pub fn new(test_root: &str, output: std::process::Output) -> Self {
        Self {
            output,
            test_root: test_root.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Normalize output for cross-platform snapshot testing
    pub fn normalized_stdout(&self) -> String {
        let mut output = self.stdout();

        if cfg!(windows) {
            output = output.replace('\\', "/").replace("\r\n", "\n");
        }

        output.replace(&self.test_root, "")
    }
}
