use crate::report::visible_roots;
use crate::results::results_model::{Hook, Suite, TestItem};
use crate::view::session::ReportSession;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format the session's current view for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Run: Canvas Smoke ===
///
/// Checkout
///   ✓ PASS  renders the order summary (12ms)
///   ✗ FAIL  submits the payment form (40ms)
///       Expected status 200 but got 500
///   Legacy
///     ⊘ SKIP  exports the old receipt format
///
/// === Results: 2 passed, 1 failed, 0 pending, 1 skipped (4 total) in 0.1s ===
/// ```
///
/// Hidden outcomes simply don't appear; the summary always reflects the
/// whole run.
pub fn format_console_report(session: &ReportSession) -> String {
    let mut out = String::new();

    let title = session.report_title().unwrap_or("Test Run");
    out.push_str(&format!("=== Test Run: {} ===\n\n", title));

    let suites = session.suites();
    for suite in visible_roots(&suites) {
        format_suite(suite, 0, &mut out);
    }

    let stats = session.stats();
    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed, {} pending, {} skipped ({} total) in {:.1}s ===\n",
        stats.passes,
        stats.failures,
        stats.pending,
        stats.skipped,
        stats.tests,
        stats.duration as f64 / 1000.0,
    ));

    out
}

fn format_suite(suite: &Suite, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{}{}\n", indent, suite.display_title()));

    for hook in &suite.before_hooks {
        format_hook(hook, depth + 1, out);
    }
    for test in &suite.tests {
        format_test(test, depth + 1, out);
    }
    for hook in &suite.after_hooks {
        format_hook(hook, depth + 1, out);
    }
    for child in &suite.suites {
        format_suite(child, depth + 1, out);
    }
}

fn format_test(test: &TestItem, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let marker = if test.pass {
        "\u{2713} PASS"
    } else if test.fail {
        "\u{2717} FAIL"
    } else if test.pending {
        "\u{25CB} PEND"
    } else {
        "\u{2298} SKIP"
    };

    out.push_str(&format!(
        "{}{}  {} ({}ms)\n",
        indent, marker, test.title, test.duration
    ));

    if test.fail {
        let detail = test
            .err
            .as_ref()
            .and_then(|err| err.message.as_deref())
            .unwrap_or("test failed");
        out.push_str(&format!("{}    {}\n", indent, detail));
    }
}

fn format_hook(hook: &Hook, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let marker = if hook.fail {
        "\u{2717} HOOK"
    } else {
        "\u{2699} HOOK"
    };

    out.push_str(&format!("{}{}  {}\n", indent, marker, hook.title));

    if hook.fail {
        let detail = hook
            .err
            .as_ref()
            .and_then(|err| err.message.as_deref())
            .unwrap_or("hook failed");
        out.push_str(&format!("{}    {}\n", indent, detail));
    }
}
