//! Integration Test: Timer Discipline
//!
//! Stage and arrival timers are cancellable `TimerSlot`s. Every tokio sleep in
//! production code lives in `orchestrator/core/src/timer.rs`; the surface
//! paces frames with `tokio::time::interval`. Nothing blocks a thread.

use std::path::Path;

use architectural_enforcement::{scan, Violation};

const TOKIO_SLEEPS: &[&str] = &["sleep(", "sleep_until("];
const THREAD_SLEEPS: &[&str] = &["thread::sleep"];

fn report(rule: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n{rule}\n");
    for v in violations {
        eprintln!("  {v}");
    }
    panic!("Found {} violation(s)", violations.len());
}

fn is_timer_module(path: &Path) -> bool {
    path.ends_with("orchestrator/core/src/timer.rs")
}

#[test]
fn test_core_sleeps_only_in_timer_module() {
    let violations = scan("orchestrator/core/src", TOKIO_SLEEPS, is_timer_module);
    report(
        "Timers must go through TimerSlot (orchestrator/core/src/timer.rs)",
        &violations,
    );
}

#[test]
fn test_tui_never_sleeps() {
    let violations = scan("tui/src", TOKIO_SLEEPS, |_| false);
    report(
        "The TUI paces frames with tokio::time::interval, never sleep",
        &violations,
    );
}

#[test]
fn test_no_thread_sleep_anywhere() {
    let mut violations = scan("orchestrator", THREAD_SLEEPS, |_| false);
    violations.extend(scan("tui/src", THREAD_SLEEPS, |_| false));
    report("std::thread::sleep blocks the runtime", &violations);
}

#[test]
fn test_timer_module_is_the_sleep_site() {
    let violations = scan("orchestrator/core/src", &["sleep_until("], |p| !is_timer_module(p));
    assert!(
        !violations.is_empty(),
        "timer.rs should own the tokio sleep; did it move?"
    );
}

#[test]
fn test_core_has_no_terminal_dependencies() {
    let violations = scan(
        "orchestrator/core/src",
        &["ratatui", "crossterm"],
        |_| false,
    );
    report("sokkaverse-core must stay UI-agnostic", &violations);
}
