use std::fs;
use std::process::Command;

fn run_bidplot(args: &[&str]) -> std::process::Output {
    let binary_path = assert_cmd::cargo::cargo_bin!("bidplot");
    Command::new(binary_path)
        .args(args)
        .output()
        .expect("cli run succeeds")
}

#[test]
fn test_wrong_argument_counts_print_usage_and_exit_1() {
    for args in [
        vec![],
        vec!["prices.csv"],
        vec!["prices.csv", "out.png", "extra"],
    ] {
        let output = run_bidplot(&args);

        assert_eq!(
            output.status.code(),
            Some(1),
            "expected exit 1 for args {args:?}"
        );
        let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
        assert!(
            stdout.contains("Usage: bidplot"),
            "usage line missing for args {args:?}: {stdout}"
        );
    }
}

#[test]
fn test_valid_invocation_writes_image_and_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("prices.csv");
    let output_path = dir.path().join("prices.png");

    let mut content = String::from("price\n");
    for i in 0..120 {
        content.push_str(&format!("{}\n", 95_000 + i * 5));
    }
    fs::write(&input_path, content).unwrap();

    let output = run_bidplot(&[
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "cli exited unsuccessfully: {output:?}"
    );
    assert!(!fs::read(&output_path).unwrap().is_empty());
}

#[test]
fn test_missing_input_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("prices.png");

    let output = run_bidplot(&["no_such_file.csv", output_path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(!output_path.exists());
}
