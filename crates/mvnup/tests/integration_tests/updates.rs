use insta::assert_snapshot;

use crate::common::{MvnupOutput, MvnupTest};

impl MvnupTest {
    pub fn updates(&self, args: &[&str]) -> MvnupOutput {
        self.mvnup(&[&["updates"], args].concat())
    }
}

#[test]
fn test_updates_without_major_changes() {
    let test = MvnupTest::new();
    let output = test.updates(&[
        "--current",
        "1.0",
        "--allow-major-updates",
        "false",
        "1.0",
        "1.1",
        "1.2",
        "2.0",
    ]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r"
    Current version: 1.0
    Allowed range: (1.0,2.0-SNAPSHOT)
    Oldest update: 1.1
    Newest update: 1.2
    All updates: 1.1, 1.2
      minor          1.1, 1.2
    ");
}

#[test]
fn test_updates_json() {
    let test = MvnupTest::new();
    let output = test.updates(&["--current", "1.0", "--format", "json", "1.0.1", "1.1", "2.0"]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r#"
    {
      "current": "1.0",
      "restriction": "(1.0,)",
      "oldest": "1.0.1",
      "newest": "2.0",
      "all": [
        "1.0.1",
        "1.1",
        "2.0"
      ],
      "newest_snapshot": null,
      "by_level": {
        "major": [
          "2.0"
        ],
        "minor": [
          "1.1"
        ],
        "incremental": [
          "1.0.1"
        ]
      }
    }
    "#);
}

#[test]
fn test_updates_in_scope() {
    let test = MvnupTest::new();
    let output = test.updates(&[
        "--current",
        "1.0",
        "--scope",
        "incremental",
        "1.0.1",
        "1.0.2",
        "1.1",
        "2.0",
    ]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r"
    Current version: 1.0
    Allowed range: (1.0,)
    Oldest update: 1.0.1
    Newest update: 1.0.2
    All updates: 1.0.1, 1.0.2
      major          2.0
      minor          1.1
      incremental    1.0.1, 1.0.2
    ");
}

#[test]
fn test_updates_from_candidates_file() {
    let test = MvnupTest::new();
    test.write_file("versions.txt", "# published\n1.1\n\n1.2-SNAPSHOT\n2.0\n");
    let output = test.updates(&[
        "--current",
        "1.0",
        "--allow-major-updates",
        "false",
        "--candidates-file",
        "versions.txt",
    ]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r"
    Current version: 1.0
    Allowed range: (1.0,2.0-SNAPSHOT)
    Oldest update: 1.1
    Newest update: 1.1
    All updates: 1.1
    Newest snapshot: 1.2-SNAPSHOT
      minor          1.1
    ");
}

#[test]
fn test_updates_with_snapshots_allowed() {
    let test = MvnupTest::new();
    let output = test.updates(&[
        "--current",
        "1.0",
        "--allow-snapshots",
        "true",
        "1.1-SNAPSHOT",
        "1.1",
    ]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r"
    Current version: 1.0
    Allowed range: (1.0,)
    Oldest update: 1.1-SNAPSHOT
    Newest update: 1.1
    All updates: 1.1-SNAPSHOT, 1.1
    Newest snapshot: 1.1-SNAPSHOT
      minor          1.1-SNAPSHOT, 1.1
    ");
}

#[test]
fn test_updates_version_too_short() {
    let test = MvnupTest::new();
    let output = test.updates(&[
        "--current",
        "1.0",
        "--allow-major-updates",
        "false",
        "--allow-minor-updates",
        "false",
        "--allow-incremental-updates",
        "false",
        "1.0.1",
    ]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "No updates available for 1.0\n");
}

#[test]
fn test_updates_skip_unincrementable_version() {
    let test = MvnupTest::new();
    let output = test.updates(&[
        "--current",
        "1.jre",
        "--allow-major-updates",
        "false",
        "--allow-minor-updates",
        "false",
        "--format",
        "json",
        "1.1",
    ]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "null\n");
    assert!(
        output
            .stderr()
            .contains("Skipping 1.jre: Cannot increment the minor segment of version 1.jre")
    );
}

#[test]
fn test_updates_missing_candidates_file() {
    let test = MvnupTest::new();
    let output = test.updates(&["--current", "1.0", "--candidates-file", "absent.txt"]);
    output.assert_failure();
    assert!(output.stderr().contains("absent.txt"));
}
