//! Regression test parameters and checks

use imagediff_core::{BoundingBox, DifferenceMask};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Record and report failures (default)
    #[default]
    Compare,
    /// Print every checked value, still recording failures
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
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

/// Numbered checks for one regression test.
///
/// Checks never panic. Each failure is printed when it happens and kept
/// for the summary; call [`RegParams::cleanup`] at the end and assert on
/// its result.
pub struct RegParams {
    test_name: String,
    /// Incremented before each check
    index: usize,
    mode: RegTestMode,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("==== {}_reg ({:?}) ====", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if self.display() {
            eprintln!(
                "  [{:02}] expected = {}, actual = {}",
                self.index, expected, actual
            );
        }

        if diff > delta {
            let msg = format!(
                "{}_reg check {}: expected {}, got {} (off by {}, tolerance {})",
                self.test_name, self.index, expected, actual, diff, delta
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two box sequences for exact, order-sensitive equality
    pub fn compare_boxes(&mut self, expected: &[BoundingBox], actual: &[BoundingBox]) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("  [{:02}] boxes = {:?}", self.index, actual);
        }

        if expected != actual {
            let msg = format!(
                "{}_reg check {}: boxes differ\n  expected {:?}\n  got      {:?}",
                self.test_name, self.index, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two difference masks cell by cell
    pub fn compare_masks(&mut self, expected: &DifferenceMask, actual: &DifferenceMask) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            let msg = format!(
                "{}_reg check {}: mask is {}x{}, expected {}x{}",
                self.test_name,
                self.index,
                actual.width(),
                actual.height(),
                expected.width(),
                expected.height()
            );
            self.record_failure(msg);
            return false;
        }

        let width = expected.width() as usize;
        let mismatch = expected
            .cells()
            .iter()
            .zip(actual.cells())
            .position(|(a, b)| a != b);
        match mismatch {
            Some(idx) => {
                let msg = format!(
                    "{}_reg check {}: mask differs first at ({}, {})",
                    self.test_name,
                    self.index,
                    idx % width,
                    idx / width
                );
                self.record_failure(msg);
                false
            }
            None => true,
        }
    }

    /// Print a summary and consume the parameters.
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        let passed = self.failures.is_empty();
        if passed {
            eprintln!("{}_reg: all {} checks passed", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        passed
    }
}
