use crate::common::{MvnupOutput, MvnupTest};

impl MvnupTest {
    pub fn filter(&self, args: &[&str]) -> MvnupOutput {
        self.mvnup(&[&["filter"], args].concat())
    }
}

#[test]
fn test_filter() {
    let test = MvnupTest::new();
    let output = test.filter(&["--range", "[1.0,2.0)", "0.9", "1.0", "1.5", "2.0"]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "1.0\n1.5\n");
}

#[test]
fn test_filter_union() {
    let test = MvnupTest::new();
    let output = test.filter(&["--range", "(,1.0],[1.2,)", "0.9", "1.1", "1.2", "3"]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "0.9\n1.2\n3\n");
}

#[test]
fn test_filter_nothing_matches() {
    let test = MvnupTest::new();
    let output = test.filter(&["--range", "[3.0,)", "1.0", "2.0"]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "");
    assert!(output.stderr().contains("No candidates fall inside [3.0,)"));
}

#[test]
fn test_filter_invalid_range() {
    let test = MvnupTest::new();
    let output = test.filter(&["--range", "[2.0,1.0]", "1.5"]);
    output.assert_failure();
    assert!(
        output
            .stderr()
            .contains("Range defies version ordering: [2.0,1.0]")
    );
}
