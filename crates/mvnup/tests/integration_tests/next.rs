use crate::common::{MvnupOutput, MvnupTest};

impl MvnupTest {
    pub fn next(&self, args: &[&str]) -> MvnupOutput {
        self.mvnup(&[&["next"], args].concat())
    }
}

#[test]
fn test_next() {
    let test = MvnupTest::new();

    for (version, segment, expected) in [
        ("5", "major", "6-SNAPSHOT"),
        ("5.0.1", "minor", "5.1.0-SNAPSHOT"),
        ("5.alpha.1", "minor", "5.beta.0-SNAPSHOT"),
        ("5.alpha-1.1", "incremental", "5.alpha-2.0-SNAPSHOT"),
        ("1.0-SNAPSHOT", "minor", "1.1-SNAPSHOT"),
    ] {
        let output = test.next(&[version, "--segment", segment]);
        output.assert_success();
        assert_eq!(output.normalized_stdout(), format!("{expected}\n"));
    }
}

#[test]
fn test_next_past_the_end() {
    let test = MvnupTest::new();
    let output = test.next(&["5", "--segment", "subincremental"]);
    output.assert_failure();
    assert_eq!(output.normalized_stdout(), "");
    assert!(
        output
            .stderr()
            .contains("Cannot increment the subincremental segment of version 5")
    );
}

#[test]
fn test_next_unknown_segment() {
    let test = MvnupTest::new();
    let output = test.next(&["5", "--segment", "patch"]);
    output.assert_failure();
    assert!(output.stderr().contains("Unknown segment level: patch"));
}
