use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_battleship-round"))
        .args(args)
        .env_remove("BATTLESHIP_ROUND_LOG")
        .output()
        .expect("failed to run battleship-round binary")
}

#[test]
fn prints_summary_for_sunk_ships() {
    let output = run(&[
        "--ship", "3:2,3:5", "--guess", "3:2", "--guess", "3:3", "--guess", "3:4", "--guess",
        "3:5",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout, "You sunk 1 ships.\nSunk ships are:\n3,2:3,5\n");
}

#[test]
fn prints_nothing_when_nothing_sank() {
    let output = run(&["--ship", "3:2,3:5", "--guess", "7:0"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn json_output() {
    let output = run(&["--ship", "0:0,1:0", "--guess", "0:0", "--guess", "1:0", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["sunk"].as_array().map(Vec::len), Some(1));
    assert_eq!(v["sunk"][0]["orientation"], "Vertical");
}

#[test]
fn validation_error_fails() {
    let output = run(&["--ship", "0:0,9:9", "--guess", "0:0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("neither horizontal nor vertical"));
}

#[test]
fn strict_length_rejects_single_cell_ship() {
    let output = run(&["--ship", "5:5,5:5", "--guess", "5:5"]);
    assert!(output.status.success());

    let output = run(&["--strict-length", "--ship", "5:5,5:5", "--guess", "5:5"]);
    assert!(!output.status.success());
}

#[test]
fn logs_go_to_stderr_and_leave_summary_intact() {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship-round"))
        .args(["--ship", "0:0,0:1", "--guess", "0:0", "--guess", "0:1"])
        .env("BATTLESHIP_ROUND_LOG", "debug")
        .output()
        .expect("failed to run battleship-round binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout, "You sunk 1 ships.\nSunk ships are:\n0,0:0,1\n");
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("DEBUG - ship 0:0,0:1"));
    assert!(stderr.contains("INFO - 1 of 1 ship(s) sunk"));
}
