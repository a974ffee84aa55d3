use serde::{Deserialize, Serialize};

/// Viewer options for one report.
///
/// Every recognized option is a named field; unrecognized keys in a
/// config file have nowhere to land and are dropped at parse time. The
/// `show_hooks` and `filter` values stay as written here and are
/// validated when applied, so a bad value degrades to a warning instead
/// of failing the load.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Overrides the document's own title in rendered output
    pub report_title: Option<String>,

    /// Hook display mode: failed, always, never, context
    pub show_hooks: Option<String>,

    /// `+`-delimited outcome filter spec, e.g. `passed+failed`
    pub filter: Option<String>,

    /// Render per-suite pass-rate bars in HTML output
    #[serde(default)]
    pub enable_charts: bool,

    /// Include projection internals in rendered output
    #[serde(default)]
    pub dev: bool,
}
