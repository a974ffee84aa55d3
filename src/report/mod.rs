//! Renderers that snapshot a session's current view.

pub mod console;
pub mod html;
pub mod junit;

use crate::results::results_model::Suite;

/// Top-level suites to render. The runner wraps everything in a bare
/// root suite; renderers hoist its children instead of giving the
/// wrapper a section of its own.
pub fn visible_roots(suites: &[Suite]) -> Vec<&Suite> {
    let mut roots = Vec::new();
    for suite in suites {
        if suite.is_bare_root() {
            roots.extend(suite.suites.iter());
        } else {
            roots.push(suite);
        }
    }
    roots
}
