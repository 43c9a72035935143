use crate::common::{MvnupOutput, MvnupTest};

impl MvnupTest {
    pub fn compare(&self, args: &[&str]) -> MvnupOutput {
        self.mvnup(&[&["compare"], args].concat())
    }
}

#[test]
fn test_compare() {
    let test = MvnupTest::new();

    let equal = test.compare(&["1.0", "1.0.0"]);
    equal.assert_success();
    assert_eq!(equal.normalized_stdout(), "1.0 = 1.0.0\n");

    let pre_release = test.compare(&["1.0-alpha-1", "1.0"]);
    pre_release.assert_success();
    assert_eq!(pre_release.normalized_stdout(), "1.0-alpha-1 < 1.0\n");

    let numeric = test.compare(&["1.10", "1.9"]);
    numeric.assert_success();
    assert_eq!(numeric.normalized_stdout(), "1.10 > 1.9\n");
}

#[test]
fn test_compare_with_mercury() {
    let test = MvnupTest::new();

    let maven = test.compare(&["1.0-jre", "1.0"]);
    maven.assert_success();
    assert_eq!(maven.normalized_stdout(), "1.0-jre < 1.0\n");

    let mercury = test.compare(&["--comparison-method", "mercury", "1.0-jre", "1.0"]);
    mercury.assert_success();
    assert_eq!(mercury.normalized_stdout(), "1.0-jre > 1.0\n");
}

#[test]
fn test_compare_unknown_method() {
    let test = MvnupTest::new();
    let output = test.compare(&["--comparison-method", "numeric", "1", "2"]);
    output.assert_failure();
    assert!(output.stderr().contains("Unknown comparison method: numeric"));
}
