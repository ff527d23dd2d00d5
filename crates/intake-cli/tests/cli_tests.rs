use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn intake_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("intake").expect("Failed to find intake binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

#[test]
fn test_cli_default_lists_steps() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Steps"))
        .stdout(predicate::str::contains("1. About You (`introduction`)"))
        .stdout(predicate::str::contains("14. Anything Else (`final`)"))
        .stdout(predicate::str::contains("(`lawyer`)").not());
}

#[test]
fn test_cli_answer_then_show() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .args(["answer", "full-name", "Jane Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Saved `full-name` to the draft of 'family-law-intake'",
        ));

    intake_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# About You (`introduction`)"))
        .stdout(predicate::str::contains("- **Full name** (`full-name`): Jane Doe"));
}

#[test]
fn test_cli_answer_rejects_repeatable_group() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .args(["answer", "children", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`children` is a repeatable group"));

    intake_cmd(&temp_dir)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));
}

#[test]
fn test_cli_show_without_answers() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No answers recorded."));
}

#[test]
fn test_cli_conditional_answer_reveals_step() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .args(["answer", "other-lawyer", "Yes"])
        .assert()
        .success();

    intake_cmd(&temp_dir)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3. The Other Party's Lawyer (`lawyer`) _shown when `other-lawyer` is \"Yes\"_",
        ))
        .stdout(predicate::str::contains("15. Anything Else (`final`)"));

    intake_cmd(&temp_dir)
        .args(["answer", "other-lawyer", "No"])
        .assert()
        .success();

    intake_cmd(&temp_dir)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("(`lawyer`)").not());
}

#[test]
fn test_cli_drafts_are_per_form() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .args(["--form", "second-opinion", "answer", "full-name", "Alex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'second-opinion'"));

    intake_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No answers recorded."));
}

#[test]
fn test_cli_fill_session_saves_draft() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .arg("fill")
        .write_stdin("set full-name Jane Doe\nnext\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 1 of 14: About You"))
        .stdout(predicate::str::contains("- **Full name** (`full-name`): Jane Doe"))
        .stdout(predicate::str::contains("# Step 2 of 14: The Other Party"))
        .stdout(predicate::str::contains("Success: Draft saved"));

    intake_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn test_cli_fill_without_save_keeps_nothing() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .arg("fill")
        .write_stdin("set full-name Jane Doe\n")
        .assert()
        .success();

    intake_cmd(&temp_dir)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));
}

#[test]
fn test_cli_fill_reports_errors_and_continues() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .arg("fill")
        .write_stdin("fly\njump 99\nback\nnext\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: unknown command 'fly'"))
        .stdout(predicate::str::contains("Error: Step index 98 is out of range"))
        .stdout(predicate::str::contains("Error: Already on the first step."))
        .stdout(predicate::str::contains("# Step 2 of 14"));
}

#[test]
fn test_cli_fill_repeatable_group() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .arg("fill")
        .write_stdin(
            "set has-children Yes\njump 6\nedit children 1 name Sam\nadd children\n\
             remove children 1\nremove children 2\nsave\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 6 of 15: Children"))
        .stdout(predicate::str::contains("### 2. Record"))
        .stdout(predicate::str::contains(
            "Error: The first record of a group cannot be removed",
        ));

    intake_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Child's name (`name`): Sam"));
}

#[test]
fn test_cli_fill_submits_on_last_step() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .arg("fill")
        .write_stdin("jump 14\nnext\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("continuing submits the form"))
        .stdout(predicate::str::contains("# Form submitted"))
        .stdout(predicate::str::contains("Error: Already submitted."));
}

#[test]
fn test_cli_draft_commands() {
    let temp_dir = create_cli_test_environment();

    intake_cmd(&temp_dir)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));

    intake_cmd(&temp_dir)
        .args(["answer", "married", "Yes"])
        .assert()
        .success();

    intake_cmd(&temp_dir)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Saved Drafts"))
        .stdout(predicate::str::contains("**family-law-intake**"));

    intake_cmd(&temp_dir)
        .args(["draft", "show", "family-law-intake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Draft: family-law-intake"))
        .stdout(predicate::str::contains("# Marriage (`marriage`)"));

    intake_cmd(&temp_dir)
        .args(["draft", "clear", "family-law-intake"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Cleared the draft of 'family-law-intake'",
        ));

    intake_cmd(&temp_dir)
        .args(["draft", "clear", "family-law-intake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No draft found"));

    intake_cmd(&temp_dir)
        .args(["draft", "show", "family-law-intake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No draft found"));
}
