use crate::results::results_model::Suite;
use crate::view::view_state::ViewState;

/// Project a suite forest through the current visibility flags.
///
/// Pure function of its inputs: tests and hooks are filtered by the
/// state's predicates, children are projected first, and a suite is kept
/// only when at least one of its filtered sequences is non-empty. A suite
/// with no surviving content of its own still survives through a
/// surviving descendant. Order is preserved everywhere, and suite
/// metadata is carried over unchanged.
pub fn project(suites: &[Suite], state: &ViewState) -> Vec<Suite> {
    suites
        .iter()
        .filter_map(|suite| project_suite(suite, state))
        .collect()
}

fn project_suite(suite: &Suite, state: &ViewState) -> Option<Suite> {
    let suites = project(&suite.suites, state);
    let tests: Vec<_> = suite
        .tests
        .iter()
        .filter(|test| state.test_visible(test))
        .cloned()
        .collect();
    let before_hooks: Vec<_> = suite
        .before_hooks
        .iter()
        .filter(|hook| state.hook_visible(hook))
        .cloned()
        .collect();
    let after_hooks: Vec<_> = suite
        .after_hooks
        .iter()
        .filter(|hook| state.hook_visible(hook))
        .cloned()
        .collect();

    if before_hooks.is_empty() && after_hooks.is_empty() && tests.is_empty() && suites.is_empty() {
        return None;
    }

    Some(Suite {
        suites,
        tests,
        before_hooks,
        after_hooks,
        ..suite.clone()
    })
}
