use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_prints_four_tables() {
    let home = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_codontab"))
        .env("HOME", home.path())
        .env_remove("CODONTAB_LOG_LEVEL")
        .output()
        .expect("failed to run codontab");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);

    assert_eq!(lines[0], "[1, 2, 3, 4, 5, 6, 9, 10, 11, 12, 13, 14, 15, 16, 21, 22, 23]");
    assert_eq!(lines[1], "['T', 'C', 'A', 'G']");
    assert_eq!(
        lines[2],
        "['A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W', 'Y', 'V']"
    );
    assert!(lines[3].starts_with("[\"TTT\", \"TTC\", \"TTA\", \"TTG\", \"TCT\""));
    assert!(lines[3].ends_with("\"GGA\", \"GGG\"]"));
    assert_eq!(lines[3].matches('"').count(), 128);
}

#[test]
fn test_writes_log_file_under_home() {
    let home = tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_codontab"))
        .env("HOME", home.path())
        .status()
        .expect("failed to run codontab");

    assert!(status.success());

    let logs: Vec<_> = std::fs::read_dir(home.path().join(".codontab").join("logs"))
        .unwrap()
        .collect();
    assert_eq!(logs.len(), 1);
}

#[test]
fn test_invalid_log_level_still_prints() {
    let home = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_codontab"))
        .env("HOME", home.path())
        .env("CODONTAB_LOG_LEVEL", "loud")
        .output()
        .expect("failed to run codontab");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 4);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid log level 'loud'"));
}
