//! Conformance checks for `ResultPointerStore` implementations.
//!
//! Any backend can run the same checks with a factory that yields a fresh,
//! empty store per check:
//!
//! ```ignore
//! let report = run_conformance_suite(MemoryStore::new);
//! assert!(report.failed == 0, "{report}");
//! ```

use std::fmt;

use crate::{ResultPointerStore, StorageError};

/// Result of a single conformance check.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub message: Option<String>,
}

impl TestResult {
    fn from_result(name: &str, result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self {
                name: name.to_string(),
                passed: true,
                message: None,
            },
            Err(msg) => Self {
                name: name.to_string(),
                passed: false,
                message: Some(msg),
            },
        }
    }
}

/// Aggregated report from a full conformance run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}]: {}",
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run every check, each against a fresh store from `factory`.
pub fn run_conformance_suite<S, F>(factory: F) -> ConformanceReport
where
    S: ResultPointerStore,
    F: Fn() -> S,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "fresh_store_is_empty",
        fresh_store_is_empty(&factory()),
    ));
    results.push(TestResult::from_result(
        "save_then_load",
        save_then_load(&factory()),
    ));
    results.push(TestResult::from_result(
        "save_replaces_previous",
        save_replaces_previous(&factory()),
    ));
    results.push(TestResult::from_result(
        "clear_removes_pointer",
        clear_removes_pointer(&factory()),
    ));
    results.push(TestResult::from_result(
        "clear_on_empty_is_ok",
        clear_on_empty_is_ok(&factory()),
    ));
    results.push(TestResult::from_result(
        "empty_token_rejected",
        empty_token_rejected(&factory()),
    ));

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}

fn load<S: ResultPointerStore>(store: &S) -> Result<Option<String>, String> {
    store.load_last().map_err(|e| format!("load_last failed: {}", e))
}

fn expect_eq(actual: Option<String>, expected: Option<&str>) -> Result<(), String> {
    if actual.as_deref() == expected {
        Ok(())
    } else {
        Err(format!("expected {:?}, got {:?}", expected, actual))
    }
}

fn fresh_store_is_empty<S: ResultPointerStore>(store: &S) -> Result<(), String> {
    expect_eq(load(store)?, None)
}

fn save_then_load<S: ResultPointerStore>(store: &S) -> Result<(), String> {
    store.save_last("token-a").map_err(|e| e.to_string())?;
    expect_eq(load(store)?, Some("token-a"))
}

fn save_replaces_previous<S: ResultPointerStore>(store: &S) -> Result<(), String> {
    store.save_last("token-a").map_err(|e| e.to_string())?;
    store.save_last("token-b").map_err(|e| e.to_string())?;
    expect_eq(load(store)?, Some("token-b"))
}

fn clear_removes_pointer<S: ResultPointerStore>(store: &S) -> Result<(), String> {
    store.save_last("token-a").map_err(|e| e.to_string())?;
    store.clear().map_err(|e| e.to_string())?;
    expect_eq(load(store)?, None)
}

fn clear_on_empty_is_ok<S: ResultPointerStore>(store: &S) -> Result<(), String> {
    store.clear().map_err(|e| e.to_string())?;
    expect_eq(load(store)?, None)
}

fn empty_token_rejected<S: ResultPointerStore>(store: &S) -> Result<(), String> {
    match store.save_last("") {
        Err(StorageError::EmptyToken) => expect_eq(load(store)?, None),
        Err(other) => Err(format!("expected EmptyToken, got {}", other)),
        Ok(()) => Err("empty token was accepted".to_string()),
    }
}
