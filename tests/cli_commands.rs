//! Tests for CLI commands (dishes, pick, plan)

use std::process::{Command, Output};

fn foodplan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_foodplan"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run foodplan")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_help_shows_all_commands() {
    let output = foodplan(&["--help"]);
    let help_text = stdout(&output);

    for command in ["dishes", "pick", "plan", "fetch-images"] {
        assert!(help_text.contains(command), "{command} command not in help");
    }
}

#[test]
fn test_dishes_lunch_excludes_dinner_only() {
    let output = foodplan(&["dishes", "--slot", "lunch"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 31);
    assert!(text.contains("Couscous Chana Salad"));
    assert!(text.contains("Masala Idli"));
    assert!(!text.contains("Lasagna"));
}

#[test]
fn test_dishes_random_only_hides_manual() {
    let output = foodplan(&["dishes", "--slot", "dinner", "--random-only"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 23);
    assert!(!text.contains("[manual]"));
}

#[test]
fn test_pick_respects_count_and_exclusions() {
    let output = foodplan(&[
        "pick", "--slot", "lunch", "--count", "17", "--exclude", "upma", "--seed", "3",
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 17);
    assert!(!text.lines().any(|line| line.starts_with("upma ")));
}

#[test]
fn test_pick_too_many_fails() {
    let output = foodplan(&["pick", "--slot", "lunch", "--count", "19"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Insufficient candidates"));
}

#[test]
fn test_pick_unknown_exclusion_fails() {
    let output = foodplan(&["pick", "--slot", "dinner", "--exclude", "tacos"]);

    assert!(!output.status.success());
}

#[test]
fn test_plan_json_is_reproducible() {
    let first = foodplan(&["plan", "--seed", "42", "--json"]);
    let second = foodplan(&["plan", "--seed", "42", "--json"]);
    assert!(first.status.success());

    assert_eq!(stdout(&first), stdout(&second));

    let plan: serde_json::Value = serde_json::from_str(&stdout(&first)).unwrap();
    assert_eq!(plan["days"].as_array().unwrap().len(), 7);
}

#[test]
fn test_plan_table_output() {
    let output = foodplan(&["plan", "--days", "3", "--seed", "1"]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_owned).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Mon"));
    assert!(lines[2].starts_with("Wed"));
}

#[test]
fn test_plan_rejects_invalid_days() {
    let output = foodplan(&["plan", "--days", "9"]);

    assert!(!output.status.success());
}
