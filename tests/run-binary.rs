use assert_cmd::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn replay_without_pushes() {
    let output = r"Level 1
######
#@   #
# $  #
#  . #
######

d
Moves: 1
Pushes: 0
Crates placed: 0/1
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--level")
        .arg("1")
        .arg("--moves")
        .arg("d")
        .arg("levels/tutorial.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn replay_steps_xsb_with_blocked() {
    let output = r"Level 1
######
#@   #
# $  #
#  . #
######

######
#    #
#@$  #
#  . #
######

######
#    #
# @$ #
#  . #
######

dR
Moves: 2
Pushes: 1
Crates placed: 0/1
Blocked: 2
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["-l", "1", "-s", "-x", "-m", "ludR", "levels/tutorial.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn replay_solving() {
    let output = Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["--moves", "lRrr", "levels/tutorial.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = r"Level 0
#####
#@$.#
#####

#####
# @!#
#####

R
Moves: 1
Pushes: 1
Solved
Blocked: 1
";
    assert!(stdout.starts_with(expected), "{}", stdout);
    // best scores
    assert!(stdout.contains("Level"));
    assert!(stdout.contains("Best"));
    assert!(stdout.contains("tutorial"));
}

#[test]
fn listing_levels() {
    let output = Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["--list", "levels/tutorial.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1 - First push"));
    assert!(stdout.contains("2 - Around the corner"));
    assert!(stdout.contains("3 - Two crates"));
    assert!(stdout.contains("Height"));
}

#[test]
fn bad_level_number() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["--level", "3", "levels/tutorial.txt"])
        .assert()
        .failure()
        .stdout("No level 3 - there are 3 levels\n");
}

#[test]
fn bad_moves() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["--moves", "rrx", "levels/tutorial.txt"])
        .assert()
        .failure()
        .stdout("Invalid move 'x' at 2 - expected one of lurdLURD\n");
}

#[test]
fn missing_file() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure();
}

#[test]
fn conflicting_modes() {
    // clap complains on stderr
    Command::main_binary()
        .unwrap()
        .args(&["--list", "--interactive", "levels/tutorial.txt"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn interactive_session() {
    let mut child = Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["-i", "levels/tutorial.txt"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"l\nR\nd\n:retry\nx\n:skip\n:quit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Level 0 | Moves: 0\n#####\n#@$.#\n#####\n"), "{}", stdout);
    assert!(stdout.contains("Solved level 0 in 1 moves: R\n"));
    assert!(stdout.contains("Level 1 | Moves: 1\n"));
    assert!(stdout.contains("Invalid move 'x' at 0 - expected one of lurdLURD\n"));
    assert!(stdout.contains("Level 2 | Moves: 0\n"));
    assert!(!stdout.contains("All levels solved"));
}

#[test]
fn save_and_restore() {
    let save = std::env::temp_dir().join(format!("sokoban-arena-cli-{}.txt", std::process::id()));

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["-l", "1", "-m", "dR", "--save"])
        .arg(&save)
        .arg("levels/tutorial.txt")
        .assert()
        .success();
    let saved = std::fs::read_to_string(&save).unwrap();
    assert_eq!(saved, "; level 1\n######\n#    #\n# @$ #\n#  . #\n######\n");

    let output = Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .args(&["-m", "urD", "--restore"])
        .arg(&save)
        .arg("levels/tutorial.txt")
        .output()
        .unwrap();
    std::fs::remove_file(&save).unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Level 1\n"), "{}", stdout);
    assert!(stdout.contains("urD\nMoves: 3\nPushes: 1\nSolved\n"), "{}", stdout);
}
