use insta::assert_snapshot;

use crate::common::{MvnupOutput, MvnupTest};

impl MvnupTest {
    pub fn segments(&self, args: &[&str]) -> MvnupOutput {
        self.mvnup(&[&["segments"], args].concat())
    }
}

#[test]
fn test_segments() {
    let test = MvnupTest::new();
    let output = test.segments(&["5.0.a.1.4.5"]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r"
    5.0.a.1.4.5 has 6 segments
      major          5
      minor          0
      incremental    a
      subincremental 1
      qualifier      4
      qualifier      5
    ");
}

#[test]
fn test_segments_of_snapshot() {
    let test = MvnupTest::new();
    let output = test.segments(&["1.0-20240102.030405-7"]);
    output.assert_success();

    assert_snapshot!(output.normalized_stdout(), @r"
    1.0-20240102.030405-7 has 5 segments
      major          1
      minor          0
      incremental    20240102
      subincremental 030405
      qualifier      7
    snapshot of 1.0-SNAPSHOT
    ");
}

#[test]
fn test_segments_of_single_number() {
    let test = MvnupTest::new();
    let output = test.segments(&["5"]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "5 has 1 segment\n  major          5\n");
}
