use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::sync::Arc;

use crate::diag::logger::{ConsoleSink, DiagnosticSink};
use crate::results::results_model::{ReportDocument, Suite, TestStats};
use crate::view::config::ReportConfig;
use crate::view::projection::project;
use crate::view::view_state::ViewState;

// ============================================================================
// Report session — one loaded document plus its visibility state
// ============================================================================

/// A loaded report: the immutable result tree, the visibility state, and
/// a cached projection of the tree through that state.
///
/// The session is the only mutation surface. `suites()` always reflects
/// the latest state: the cache is keyed on the state's revision counter,
/// so it refreshes exactly when a filter-relevant change happened and is
/// served untouched otherwise. Chrome changes (side nav, loading flag)
/// never invalidate it.
pub struct ReportSession {
    report_title: Option<String>,
    stats: TestStats,
    all_suites: Vec<Suite>,
    state: ViewState,
    enable_charts: bool,
    dev_mode: bool,
    sink: Arc<dyn DiagnosticSink>,
    filtered: RefCell<Vec<Suite>>,
    filtered_revision: Cell<u64>,
    recomputes: Cell<u64>,
}

// The sink is a trait object without a `Debug` bound, so it is elided.
impl fmt::Debug for ReportSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportSession")
            .field("report_title", &self.report_title)
            .field("stats", &self.stats)
            .field("all_suites", &self.all_suites)
            .field("state", &self.state)
            .field("enable_charts", &self.enable_charts)
            .field("dev_mode", &self.dev_mode)
            .field("filtered", &self.filtered)
            .field("filtered_revision", &self.filtered_revision)
            .field("recomputes", &self.recomputes)
            .finish_non_exhaustive()
    }
}

impl ReportSession {
    /// Build a session with warnings going to stderr.
    pub fn new(document: ReportDocument, config: &ReportConfig) -> Self {
        Self::with_logger(document, config, Arc::new(ConsoleSink))
    }

    /// Build a session with an injected diagnostic sink. The sink is
    /// shared, so the caller can keep a handle and inspect warnings.
    pub fn with_logger(
        document: ReportDocument,
        config: &ReportConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let ReportDocument { stats, suites, report_title } = document;

        let mut state = ViewState::new();
        state.apply_config(config, sink.as_ref());

        let all_suites = vec![suites];
        let filtered = project(&all_suites, &state);
        let filtered_revision = Cell::new(state.revision());

        Self {
            report_title: config.report_title.clone().or(report_title),
            stats,
            all_suites,
            state,
            enable_charts: config.enable_charts,
            dev_mode: config.dev,
            sink,
            filtered: RefCell::new(filtered),
            filtered_revision,
            recomputes: Cell::new(1),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The filtered view of the result tree under the current state.
    ///
    /// Refreshes the cache when the state revision moved since the last
    /// read. The returned borrow ends before the next mutation can start,
    /// since mutations take `&mut self`.
    pub fn suites(&self) -> Ref<'_, [Suite]> {
        if self.filtered_revision.get() != self.state.revision() {
            *self.filtered.borrow_mut() = project(&self.all_suites, &self.state);
            self.filtered_revision.set(self.state.revision());
            self.recomputes.set(self.recomputes.get() + 1);
        }
        Ref::map(self.filtered.borrow(), |filtered| filtered.as_slice())
    }

    /// The unfiltered tree as loaded.
    pub fn all_suites(&self) -> &[Suite] {
        &self.all_suites
    }

    pub fn stats(&self) -> &TestStats {
        &self.stats
    }

    pub fn report_title(&self) -> Option<&str> {
        self.report_title.as_deref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn enable_charts(&self) -> bool {
        self.enable_charts
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// How many times the projection has run since the session was built,
    /// counting the initial one. Stays flat across reads that hit the
    /// cache.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes.get()
    }

    // ========================================================================
    // Operations (forwarded to the state container)
    // ========================================================================

    pub fn toggle_filter(&mut self, name: &str) {
        self.state.toggle_filter(name);
    }

    pub fn set_show_hooks(&mut self, value: &str) {
        self.state.set_show_hooks(value, self.sink.as_ref());
    }

    pub fn open_side_nav(&mut self) {
        self.state.open_side_nav();
    }

    pub fn close_side_nav(&mut self) {
        self.state.close_side_nav();
    }

    pub fn toggle_is_loading(&mut self, explicit: Option<bool>) {
        self.state.toggle_is_loading(explicit);
    }
}
