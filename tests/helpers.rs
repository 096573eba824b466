//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use fixtures::{MockIo, PORTFOLIO};
use kiosk_shell::config::DefaultConfig;
use kiosk_shell::Shell;

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create a shell over the portfolio fixture, prompt already consumed.
pub fn create_test_shell() -> Shell<'static, MockIo, DefaultConfig> {
    let io = MockIo::new();
    let mut shell = Shell::new(&PORTFOLIO, io);
    shell.activate().unwrap();
    shell.__test_io_mut().clear_output();
    shell
}

// ============================================================================
// Command Execution Helpers
// ============================================================================

/// Type a command, submit it, and return everything written since.
pub fn execute_command(shell: &mut Shell<'static, MockIo, DefaultConfig>, cmd: &str) -> String {
    shell.__test_io_mut().clear_output();

    for c in cmd.chars() {
        shell.process_char(c).unwrap();
    }
    if !cmd.ends_with('\n') {
        shell.process_char('\n').unwrap();
    }

    shell.__test_io().output()
}

/// Type input without submitting (no trailing newline).
pub fn type_input(shell: &mut Shell<'static, MockIo, DefaultConfig>, input: &str) {
    for c in input.chars() {
        shell.process_char(c).unwrap();
    }
}

/// Press the Tab key.
pub fn press_tab(shell: &mut Shell<'static, MockIo, DefaultConfig>) {
    shell.process_char('\t').unwrap();
}

/// Press the up arrow (ESC [ A).
pub fn press_up(shell: &mut Shell<'static, MockIo, DefaultConfig>) {
    type_input(shell, "\x1b[A");
}

/// Press the down arrow (ESC [ B).
pub fn press_down(shell: &mut Shell<'static, MockIo, DefaultConfig>) {
    type_input(shell, "\x1b[B");
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the output contains every expected fragment.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for fragment in expected {
        assert!(
            output.contains(fragment),
            "expected '{}' in output: {:?}",
            fragment,
            output
        );
    }
}
