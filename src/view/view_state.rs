use crate::diag::logger::{DiagnosticSink, warn_invalid_option};
use crate::results::results_model::{Hook, TestItem};
use crate::view::config::ReportConfig;

// ============================================================================
// Visibility state — which parts of the result tree the viewer shows
// ============================================================================

/// How hooks are surfaced in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookDisplay {
    /// Only hooks that failed (the default)
    Failed,
    /// Every hook
    Always,
    /// No hooks at all
    Never,
    /// Only hooks that carry context
    Context,
}

impl HookDisplay {
    /// Names accepted from config files, CLI flags, and viewers.
    pub const OPTIONS: [&'static str; 4] = ["failed", "always", "never", "context"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "failed" => Some(HookDisplay::Failed),
            "always" => Some(HookDisplay::Always),
            "never" => Some(HookDisplay::Never),
            "context" => Some(HookDisplay::Context),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HookDisplay::Failed => "failed",
            HookDisplay::Always => "always",
            HookDisplay::Never => "never",
            HookDisplay::Context => "context",
        }
    }
}

/// Tokens accepted in a `+`-delimited filter spec.
const FILTER_OPTIONS: [&'static str; 5] = ["all", "passed", "failed", "pending", "skipped"];

/// User-controlled visibility flags for a loaded report.
///
/// Fields are private: every change goes through an operation here, and
/// operations that affect the filtered projection bump `revision`. Caches
/// keyed on the revision stay valid across changes that only touch
/// chrome state (side nav, loading flag).
#[derive(Debug, Clone)]
pub struct ViewState {
    show_passed: bool,
    show_failed: bool,
    show_pending: bool,
    show_skipped: bool,
    show_hooks: HookDisplay,
    side_nav_open: bool,
    is_loading: bool,
    revision: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            show_passed: true,
            show_failed: true,
            show_pending: true,
            show_skipped: false,
            show_hooks: HookDisplay::Failed,
            side_nav_open: false,
            is_loading: true,
            revision: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn show_passed(&self) -> bool {
        self.show_passed
    }

    pub fn show_failed(&self) -> bool {
        self.show_failed
    }

    pub fn show_pending(&self) -> bool {
        self.show_pending
    }

    pub fn show_skipped(&self) -> bool {
        self.show_skipped
    }

    pub fn show_hooks(&self) -> HookDisplay {
        self.show_hooks
    }

    pub fn side_nav_open(&self) -> bool {
        self.side_nav_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Counter bumped by every filter-relevant change. Cache key for
    /// derived projections.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a test survives the current outcome toggles.
    pub fn test_visible(&self, test: &TestItem) -> bool {
        (self.show_passed && test.pass)
            || (self.show_failed && test.fail)
            || (self.show_pending && test.pending)
            || (self.show_skipped && test.skipped)
    }

    /// Whether a hook survives the current hook display mode.
    pub fn hook_visible(&self, hook: &Hook) -> bool {
        match self.show_hooks {
            HookDisplay::Always => true,
            HookDisplay::Failed => hook.fail,
            HookDisplay::Context => hook.has_context(),
            HookDisplay::Never => false,
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Flip one outcome toggle by field name (`show_passed`, `show_failed`,
    /// `show_pending`, `show_skipped`). Unknown names are a no-op.
    pub fn toggle_filter(&mut self, name: &str) {
        match name {
            "show_passed" => self.show_passed = !self.show_passed,
            "show_failed" => self.show_failed = !self.show_failed,
            "show_pending" => self.show_pending = !self.show_pending,
            "show_skipped" => self.show_skipped = !self.show_skipped,
            _ => return,
        }
        self.revision += 1;
    }

    /// Switch the hook display mode. An unrecognized name keeps the
    /// current mode and emits a warning naming the valid options.
    pub fn set_show_hooks(&mut self, value: &str, sink: &dyn DiagnosticSink) {
        match HookDisplay::from_name(value) {
            Some(mode) => {
                if self.show_hooks != mode {
                    self.show_hooks = mode;
                    self.revision += 1;
                }
            }
            None => warn_invalid_option(sink, "show_hooks", value, &HookDisplay::OPTIONS),
        }
    }

    pub fn open_side_nav(&mut self) {
        self.side_nav_open = true;
    }

    pub fn close_side_nav(&mut self) {
        self.side_nav_open = false;
    }

    /// Set the loading flag to `explicit`, or flip it when no value is
    /// given.
    pub fn toggle_is_loading(&mut self, explicit: Option<bool>) {
        self.is_loading = explicit.unwrap_or(!self.is_loading);
    }

    /// Apply the recognized view settings from a report config: an
    /// optional hook display override and an optional filter spec.
    pub fn apply_config(&mut self, config: &ReportConfig, sink: &dyn DiagnosticSink) {
        if let Some(show_hooks) = config.show_hooks.as_deref() {
            self.set_show_hooks(show_hooks, sink);
        }
        if let Some(filter) = config.filter.as_deref() {
            self.apply_filter_spec(filter, sink);
        }
    }

    /// Parse a `+`-delimited filter spec like `"passed+failed"`.
    ///
    /// Unknown tokens are dropped with a warning each. When at least one
    /// valid token remains and `all` is not among them, the four outcome
    /// toggles are set from token membership; otherwise the current
    /// toggles stay untouched.
    fn apply_filter_spec(&mut self, spec: &str, sink: &dyn DiagnosticSink) {
        let valid: Vec<&str> = spec
            .split('+')
            .filter(|token| {
                let known = FILTER_OPTIONS.contains(token);
                if !known {
                    warn_invalid_option(sink, "filter", token, &FILTER_OPTIONS);
                }
                known
            })
            .collect();

        if !valid.is_empty() && !valid.contains(&"all") {
            self.set_filters(
                valid.contains(&"passed"),
                valid.contains(&"failed"),
                valid.contains(&"pending"),
                valid.contains(&"skipped"),
            );
        }
    }

    fn set_filters(&mut self, passed: bool, failed: bool, pending: bool, skipped: bool) {
        let current = (
            self.show_passed,
            self.show_failed,
            self.show_pending,
            self.show_skipped,
        );
        if current != (passed, failed, pending, skipped) {
            self.show_passed = passed;
            self.show_failed = failed;
            self.show_pending = pending;
            self.show_skipped = skipped;
            self.revision += 1;
        }
    }
}
