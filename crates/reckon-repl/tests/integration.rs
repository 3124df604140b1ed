//! Integration tests for the reckon REPL.
//!
//! These tests run scripts through the REPL and verify what it would print.

use reckon_repl::Repl;

/// Helper to run multiple lines through a REPL and collect outputs.
///
/// Blank lines and lines starting with `#` are skipped. Input after the session ends is
/// never read, matching the interactive loop.
fn run_script(script: &str) -> (Repl, Vec<String>) {
    let mut repl = Repl::new();
    let mut outputs = vec![repl.intro()];

    for line in script.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if repl.is_finished() {
            break;
        }
        if let Some(output) = repl.process_line(line) {
            outputs.push(output);
        }
    }

    (repl, outputs)
}

/// Helper to check if output contains expected strings, in order.
fn outputs_contain_in_order(outputs: &[String], expected: &[&str]) -> bool {
    let joined = outputs.join("\n");
    let mut rest = joined.as_str();
    for e in expected {
        match rest.find(e) {
            Some(pos) => rest = &rest[pos + e.len()..],
            None => return false,
        }
    }
    true
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn restart_and_quit() {
    let (repl, outputs) = run_script("+\n2\n3\nn\n*\n4\n5\nquit");
    assert!(
        outputs_contain_in_order(
            &outputs,
            &[
                "2.0 + 3.0 = 5.0",
                "+\n-\n*\n/\n^\nlog",
                "4.0 * 5.0 = 20.0",
                "Thank you for trying out the calculator app. Have a great day!",
            ]
        ),
        "Output was: {outputs:?}"
    );
    assert!(repl.is_finished());
}

#[test]
fn logarithm_of_eight() {
    let (_, outputs) = run_script("log\n2\n8");
    assert_eq!(outputs.last().map(String::as_str), Some("log base 2.0 of 8.0 = 3.0"));
}

#[test]
fn logarithm_of_zero_ends_session() {
    let (repl, outputs) = run_script("log\n2\n0\n+");
    assert!(repl.is_finished());
    assert_eq!(
        outputs.last().map(String::as_str),
        Some(
            "Cannot take log of a number that is lesser than or equal to 0\n\
             Thank you for trying out the calculator app. Have a great day!"
        )
    );
}

#[test]
fn divide_by_zero_then_five() {
    let (_, outputs) = run_script("/\n10\n0\n5");
    assert!(outputs_contain_in_order(
        &outputs,
        &[
            "Please do not enter 0 since it is not possible to divide by 0.",
            "10.0 / 5.0 = 2.0",
        ]
    ));
}

// ============================================================================
// Prompts
// ============================================================================

#[test]
fn prompts_follow_phases() {
    let mut repl = Repl::new();
    assert_eq!(repl.prompt(), "Please enter an operation: ");
    repl.process_line("-");
    assert_eq!(repl.prompt(), "Please enter the first number: ");
    repl.process_line("7.25");
    assert_eq!(repl.prompt(), "Please enter the second number: ");
    assert_eq!(repl.process_line("0.25").as_deref(), Some("7.25 - 0.25 = 7.0"));
    assert_eq!(
        repl.prompt(),
        "Type 'y' to continue calculating with 7.0 or type 'n' to start a new calculation or type 'quit' to exit: "
    );
    repl.process_line("y");
    assert_eq!(repl.prompt(), "Please enter an operation: ");
    repl.process_line("^");
    assert_eq!(repl.prompt(), "Please enter the second number: ");
}

#[test]
fn silent_steps_print_nothing() {
    let mut repl = Repl::new();
    assert_eq!(repl.process_line("+"), None);
    assert_eq!(repl.process_line("1"), None);
}

#[test]
fn end_of_input_says_goodbye() {
    let mut repl = Repl::new();
    repl.process_line("*");
    assert_eq!(
        repl.end_of_input().as_deref(),
        Some("Thank you for trying out the calculator app. Have a great day!")
    );
    assert!(repl.is_finished());
    assert_eq!(repl.end_of_input(), None);
}

#[test]
fn end_of_input_after_result() {
    let mut repl = Repl::new();
    for line in ["^", "2", "3"] {
        repl.process_line(line);
    }
    assert_eq!(
        repl.end_of_input().as_deref(),
        Some("Thank you for trying out the calculator app. Have a great day!")
    );
    assert!(repl.is_finished());
    assert_eq!(repl.prompt(), "");
}

#[test]
fn comments_and_retries() {
    let (_, outputs) = run_script(
        r#"
        # pick an operator, badly first
        mod
        *
        # operands with a typo
        six
        6
        7
        "#,
    );
    assert!(outputs_contain_in_order(
        &outputs,
        &[
            "Please enter one of these valid operations: ['+', '-', '*', '/', '^', 'log']",
            "Please enter a NUMBER and not any other input",
            "6.0 * 7.0 = 42.0",
        ]
    ));
}
