use crate::common::MvnupTest;

#[test]
fn test_config_file_in_current_directory() {
    let test = MvnupTest::new();
    test.write_file("mvnup.yaml", "allow-major-updates: false\n");

    let output = test.updates(&["--current", "1.0", "--format", "json", "1.1", "2.0"]);
    output.assert_success();
    assert!(output.normalized_stdout().contains(r#""newest": "1.1""#));
}

#[test]
fn test_flags_override_config_file() {
    let test = MvnupTest::new();
    test.write_file("mvnup.yaml", "allow-major-updates: false\n");

    let output = test.updates(&[
        "--current",
        "1.0",
        "--allow-major-updates",
        "true",
        "--format",
        "json",
        "1.1",
        "2.0",
    ]);
    output.assert_success();
    assert!(output.normalized_stdout().contains(r#""newest": "2.0""#));
}

#[test]
fn test_named_config_file() {
    let test = MvnupTest::new();
    test.write_file("mercury.yaml", "comparison-method: mercury\n");

    let output = test.compare(&["--config", "mercury.yaml", "1.0-jre", "1.0"]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "1.0-jre > 1.0\n");

    let missing = test.compare(&["--config", "absent.yaml", "1.0", "1.0"]);
    missing.assert_failure();
    assert!(missing.stderr().contains("Could not load configuration from absent.yaml"));
}

#[test]
fn test_environment_configuration() {
    let mut test = MvnupTest::new();
    test.env
        .insert("MVNUP_COMPARISON_METHOD".into(), "mercury".into());

    let output = test.compare(&["1.0-jre", "1.0"]);
    output.assert_success();
    assert_eq!(output.normalized_stdout(), "1.0-jre > 1.0\n");
}
