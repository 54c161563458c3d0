use pretty_assertions::assert_eq;

use crate::common::VersoTest;

#[test]
fn test_sort_arguments() {
    let test = VersoTest::new();

    let output = test.verso(&[
        "sort",
        "1.2.3",
        "1.2.3-beta.2",
        "1.2.3-alpha",
        "1.2.3-beta.11",
        "1.2.3-rc.1",
        "1.2.3-alpha.1",
    ]);
    output.assert_success();
    assert_eq!(
        output.stdout(),
        "1.2.3-alpha\n1.2.3-alpha.1\n1.2.3-beta.2\n1.2.3-beta.11\n1.2.3-rc.1\n1.2.3\n"
    );
}

#[test]
fn test_sort_reverse() {
    let test = VersoTest::new();

    let output = test.verso(&["sort", "--reverse", "0.1.0", "10.0.0", "2.0.0"]);
    output.assert_success();
    assert_eq!(output.stdout(), "10.0.0\n2.0.0\n0.1.0\n");
}

#[test]
fn test_sort_stdin() {
    let test = VersoTest::new();

    let output = test.verso_with_stdin(&["sort"], "2.0.0\n\n  1.0.0-rc.1  \n1.0.0\n");
    output.assert_success();
    assert_eq!(output.stdout(), "1.0.0-rc.1\n1.0.0\n2.0.0\n");
}

#[test]
fn test_sort_json() {
    let test = VersoTest::new();

    let output = test.verso(&["--format", "json", "sort", "1.0.0", "1.0.0-rc.1+b"]);
    output.assert_success();

    let json: Vec<String> = serde_json::from_str(&output.stdout()).unwrap();
    assert_eq!(json, ["1.0.0-rc.1+b", "1.0.0"]);
}

#[test]
fn test_sort_malformed_version() {
    let test = VersoTest::new();

    let output = test.verso(&["sort", "1.0.0", "v2"]);
    output.assert_code(2);
    assert!(output.stdout().is_empty());
}
