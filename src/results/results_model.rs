use serde::{Deserialize, Serialize};

// ============================================================================
// Result tree — the immutable outcome of a finished test run
// ============================================================================

/// A complete results document as emitted by the test runner.
///
/// Deserialized from JSON and never mutated afterwards: every view of the
/// data is a fresh projection of this tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// Run-wide totals, computed upstream by the runner
    pub stats: TestStats,

    /// Root of the suite tree (usually an untitled wrapper suite)
    pub suites: Suite,

    /// Title the runner chose for this report, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_title: Option<String>,
}

/// Aggregate counters for a whole run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestStats {
    /// Number of suites, not counting the root wrapper
    #[serde(default)]
    pub suites: u32,

    /// Number of tests across all suites
    #[serde(default)]
    pub tests: u32,

    #[serde(default)]
    pub passes: u32,

    #[serde(default)]
    pub failures: u32,

    #[serde(default)]
    pub pending: u32,

    #[serde(default)]
    pub skipped: u32,

    /// Total run duration in milliseconds
    #[serde(default)]
    pub duration: u64,

    /// Percentage of registered tests that passed
    #[serde(default)]
    pub pass_percent: f64,

    /// ISO 8601 timestamp of the run start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// ISO 8601 timestamp of the run end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// A suite node: child suites, tests, and the hooks that ran around them.
///
/// Suites nest to arbitrary depth. The four sequences keep the order the
/// runner recorded; nothing here is sorted or deduplicated after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suite {
    /// Stable identity assigned by the runner
    pub uuid: String,

    /// Suite title; empty for the root wrapper
    pub title: String,

    /// Source file the suite came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_file: Option<String>,

    /// Child suites, in declaration order
    #[serde(default)]
    pub suites: Vec<Suite>,

    /// Tests directly owned by this suite
    #[serde(default)]
    pub tests: Vec<TestItem>,

    /// Hooks that ran before this suite's tests
    #[serde(default)]
    pub before_hooks: Vec<Hook>,

    /// Hooks that ran after this suite's tests
    #[serde(default)]
    pub after_hooks: Vec<Hook>,

    /// Combined duration of this suite's own tests in milliseconds
    #[serde(default)]
    pub duration: u64,

    /// Whether this is the runner's synthetic root wrapper
    #[serde(default)]
    pub root: bool,
}

impl Suite {
    /// Title to show for this suite, falling back to the uuid when the
    /// runner recorded no title.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.uuid
        } else {
            &self.title
        }
    }

    /// A root wrapper with no content of its own. Renderers hoist the
    /// children of a bare root instead of giving it a section.
    pub fn is_bare_root(&self) -> bool {
        self.root
            && self.title.is_empty()
            && self.tests.is_empty()
            && self.before_hooks.is_empty()
            && self.after_hooks.is_empty()
    }
}

/// A single test with its outcome flags.
///
/// Exactly one of `pass`, `fail`, `pending`, `skipped` is set by the
/// runner; this crate reads the flags and never recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestItem {
    /// Stable identity assigned by the runner
    pub uuid: String,

    /// Test title as written in the source
    pub title: String,

    /// Title prefixed with the enclosing suite titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_title: Option<String>,

    /// Execution time in milliseconds
    #[serde(default)]
    pub duration: u64,

    /// Runner's speed classification (fast, medium, slow)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    #[serde(default)]
    pub pass: bool,

    #[serde(default)]
    pub fail: bool,

    #[serde(default)]
    pub pending: bool,

    #[serde(default)]
    pub skipped: bool,

    /// Source code of the test body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Failure details, present for failing tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<TestError>,

    /// Extra context attached during the run, JSON-stringified upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Failure details for a failing test or hook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Sanitized stack trace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estack: Option<String>,

    /// Unified diff of expected vs actual, when the assertion produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// A before/after hook recorded alongside a suite's tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    /// Stable identity assigned by the runner
    pub uuid: String,

    /// Hook title, e.g. `"before each" hook`
    pub title: String,

    #[serde(default)]
    pub fail: bool,

    /// Extra context attached during the run, JSON-stringified upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Execution time in milliseconds
    #[serde(default)]
    pub duration: u64,

    /// Failure details, present for failing hooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<TestError>,
}

impl Hook {
    /// Whether the hook carries displayable context. An empty string
    /// counts as no context.
    pub fn has_context(&self) -> bool {
        self.context.as_deref().map_or(false, |c| !c.is_empty())
    }
}
