//! Regression test parameters and operations

use labeledit_core::LabelGrid;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and fail on mismatch (default)
    #[default]
    Compare,
    /// Display mode - run and report without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check, the mode, and any recorded failures. Call
/// [`RegParams::cleanup`] at the end and assert its return value.
pub struct RegParams {
    /// Name of the test (e.g., "labelmorph")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current check index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Record a named condition check.
    pub fn check(&mut self, what: &str, condition: bool) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg, check {}: {}",
                self.test_name, self.index, what
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
        }
        condition
    }

    /// Compare two integer values.
    pub fn compare_values(&mut self, expected: i64, actual: i64) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            return false;
        }
        true
    }

    /// Compare two grids for identical dimensions and content.
    pub fn compare_grids(&mut self, expected: &LabelGrid, actual: &LabelGrid) -> bool {
        self.index += 1;
        if !expected.same_content(actual) {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {}\n\
                 expected {:?}, actual {:?}",
                self.test_name,
                self.index,
                expected.data(),
                actual.data()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            return false;
        }
        true
    }

    /// Finish the test, reporting success or the recorded failures.
    ///
    /// Returns true when every check passed (always true in display mode).
    pub fn cleanup(&self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg: {} checks", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "FAILURE: {}_reg: {} of {} checks failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        self.mode == RegTestMode::Display
    }
}
