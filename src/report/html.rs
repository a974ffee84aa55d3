use crate::report::visible_roots;
use crate::results::results_model::{Hook, Suite, TestError, TestItem};
use crate::view::session::ReportSession;

// ============================================================================
// HTML reporter — self-contained snapshot of the filtered view
// ============================================================================

/// Generate a self-contained HTML report of the session's current view.
///
/// Features:
/// - Green/red header based on overall pass/fail
/// - Summary bar with per-outcome counts
/// - Nested suite sections with anchors, plus a side nav linking to them
/// - Hooks, failure details, code, and context inline with their suite
/// - Inline CSS (no external dependencies)
///
/// Only suites, tests, and hooks that survive the session's projection
/// appear. Regenerate after a state change to snapshot the new view.
pub fn generate_html_report(session: &ReportSession) -> String {
    let stats = session.stats();
    let all_passed = stats.failures == 0;
    let header_color = if all_passed { "#4CAF50" } else { "#f44336" };
    let status_text = if all_passed {
        "ALL TESTS PASSED"
    } else {
        "SOME TESTS FAILED"
    };

    let title = session.report_title().unwrap_or("Test Report");
    let duration_text = format!(" in {:.1}s", stats.duration as f64 / 1000.0);

    let suites = session.suites();
    let roots = visible_roots(&suites);

    let mut nav_items = String::new();
    for suite in &roots {
        render_nav_item(suite, &mut nav_items);
    }

    let mut sections = String::new();
    for suite in &roots {
        render_suite(suite, 0, session.enable_charts(), &mut sections);
    }

    let nav_class = if session.state().side_nav_open() {
        "sidenav open"
    } else {
        "sidenav"
    };

    let dev_footer = if session.dev_mode() {
        format!(
            "<p class=\"dev\">revision {}, {} projection(s)</p>\n",
            session.state().revision(),
            session.recompute_count()
        )
    } else {
        String::new()
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} — Test Report</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: {header_color}; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 16px; opacity: 0.9; }}
.content {{ max-width: 900px; margin: 20px auto; padding: 0 20px; }}
.suite {{ background: white; border-radius: 6px; padding: 16px 20px; margin-bottom: 16px; }}
.suite .suite {{ border: 1px solid #eee; margin-top: 12px; }}
.suite h2, .suite h3, .suite h4 {{ margin: 0 0 8px 0; }}
.test-case {{ background: #fafafa; border-radius: 4px; padding: 10px 14px; margin: 8px 0; border-left: 4px solid #ccc; }}
.test-case.pass {{ border-left-color: #4CAF50; }}
.test-case.fail {{ border-left-color: #f44336; }}
.test-case.pending {{ border-left-color: #ffc107; }}
.test-case.skipped {{ border-left-color: #9e9e9e; }}
.test-case.hook {{ border-left-color: #90a4ae; }}
.test-case.hook.fail {{ border-left-color: #f44336; }}
.test-case h5, .test-case h6 {{ margin: 0 0 6px 0; font-size: 14px; }}
.test-case .meta {{ margin: 4px 0; color: #666; font-size: 12px; }}
.test-case .error {{ color: #f44336; font-weight: bold; margin: 6px 0; font-size: 13px; }}
.test-case pre {{ background: #263238; color: #eceff1; padding: 10px; border-radius: 4px; overflow-x: auto; font-size: 12px; }}
.bar {{ background: #eee; border-radius: 4px; height: 8px; margin: 8px 0; overflow: hidden; }}
.bar-fill {{ background: #4CAF50; height: 100%; }}
.sidenav {{ position: fixed; top: 0; right: 0; width: 260px; height: 100%; overflow-y: auto; background: #263238; color: white; padding: 16px; display: none; }}
.sidenav.open {{ display: block; }}
.sidenav h2 {{ font-size: 16px; margin: 0 0 12px 0; }}
.sidenav ul {{ list-style: none; padding-left: 12px; margin: 4px 0; }}
.sidenav a {{ color: #90caf9; text-decoration: none; display: block; margin: 4px 0; font-size: 13px; }}
.footer {{ text-align: center; color: #999; font-size: 12px; padding: 16px; }}
</style>
</head>
<body>
<div class="header">
<h1>{status_text}</h1>
<p>{title}: {passes} passed, {failures} failed, {pending} pending, {skipped} skipped ({tests} total){duration}</p>
</div>
<nav class="{nav_class}">
<h2>{title}</h2>
<ul>
{nav_items}</ul>
</nav>
<div class="content">
{sections}</div>
<div class="footer">
{dev_footer}</div>
</body>
</html>"##,
        title = escape_html(title),
        header_color = header_color,
        status_text = status_text,
        passes = stats.passes,
        failures = stats.failures,
        pending = stats.pending,
        skipped = stats.skipped,
        tests = stats.tests,
        duration = duration_text,
        nav_class = nav_class,
        nav_items = nav_items,
        sections = sections,
        dev_footer = dev_footer,
    )
}

/// One side nav entry with nested children.
fn render_nav_item(suite: &Suite, out: &mut String) {
    out.push_str(&format!(
        "<li><a href=\"#{id}\">{title}</a>",
        id = escape_html(&suite.uuid),
        title = escape_html(suite.display_title()),
    ));
    if !suite.suites.is_empty() {
        out.push_str("\n<ul>\n");
        for child in &suite.suites {
            render_nav_item(child, out);
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</li>\n");
}

/// One suite section: its hooks and tests, then child sections.
fn render_suite(suite: &Suite, depth: usize, enable_charts: bool, out: &mut String) {
    // h2 for top-level suites, capped at h4 below that
    let level = (depth + 2).min(4);
    out.push_str(&format!(
        "<section class=\"suite\" id=\"{id}\">\n<h{level}>{title}</h{level}>\n",
        id = escape_html(&suite.uuid),
        level = level,
        title = escape_html(suite.display_title()),
    ));

    if let Some(ref file) = suite.full_file {
        if !file.is_empty() {
            out.push_str(&format!("<p class=\"meta\">{}</p>\n", escape_html(file)));
        }
    }

    if enable_charts {
        render_pass_bar(&suite.tests, out);
    }

    for hook in &suite.before_hooks {
        render_hook(hook, "before", out);
    }
    for test in &suite.tests {
        render_test(test, out);
    }
    for hook in &suite.after_hooks {
        render_hook(hook, "after", out);
    }
    for child in &suite.suites {
        render_suite(child, depth + 1, enable_charts, out);
    }

    out.push_str("</section>\n");
}

/// Pass-rate bar over the suite's own (already filtered) tests.
fn render_pass_bar(tests: &[TestItem], out: &mut String) {
    if tests.is_empty() {
        return;
    }
    let passed = tests.iter().filter(|t| t.pass).count();
    let percent = passed * 100 / tests.len();
    out.push_str(&format!(
        "<div class=\"bar\"><div class=\"bar-fill\" style=\"width: {}%\"></div></div>\n",
        percent
    ));
}

fn render_test(test: &TestItem, out: &mut String) {
    let (class, marker) = test_status(test);

    let speed_text = test
        .speed
        .as_deref()
        .map(|speed| format!(", {}", speed))
        .unwrap_or_default();

    out.push_str(&format!(
        "<div class=\"test-case {class}\">\n<h5>{marker} {title}</h5>\n<p class=\"meta\">{duration}ms{speed}</p>\n",
        class = class,
        marker = marker,
        title = escape_html(&test.title),
        duration = test.duration,
        speed = speed_text,
    ));

    if let Some(ref err) = test.err {
        render_error(err, out);
    }

    if let Some(ref code) = test.code {
        if !code.is_empty() {
            out.push_str(&format!("<pre class=\"code\">{}</pre>\n", escape_html(code)));
        }
    }

    render_context(test.context.as_deref(), out);
    out.push_str("</div>\n");
}

fn render_hook(hook: &Hook, phase: &str, out: &mut String) {
    let class = if hook.fail { "hook fail" } else { "hook" };
    out.push_str(&format!(
        "<div class=\"test-case {class}\">\n<h5>\u{2699} [{phase}] {title}</h5>\n",
        class = class,
        phase = phase,
        title = escape_html(&hook.title),
    ));

    if let Some(ref err) = hook.err {
        render_error(err, out);
    }

    render_context(hook.context.as_deref(), out);
    out.push_str("</div>\n");
}

fn render_error(err: &TestError, out: &mut String) {
    if let Some(ref message) = err.message {
        out.push_str(&format!(
            "<p class=\"error\">Error: {}</p>\n",
            escape_html(message)
        ));
    }
    if let Some(ref diff) = err.diff {
        out.push_str(&format!("<pre class=\"diff\">{}</pre>\n", escape_html(diff)));
    }
    if let Some(ref stack) = err.estack {
        out.push_str(&format!("<pre class=\"stack\">{}</pre>\n", escape_html(stack)));
    }
}

/// Context payloads stay exactly as the runner recorded them; rendering
/// them into richer shapes (links, images) is a host concern.
fn render_context(context: Option<&str>, out: &mut String) {
    if let Some(context) = context {
        if !context.is_empty() {
            out.push_str("<h6>Additional Test Context</h6>\n");
            out.push_str(&format!(
                "<pre class=\"context\">{}</pre>\n",
                escape_html(context)
            ));
        }
    }
}

/// CSS class and marker glyph for a test's outcome.
fn test_status(test: &TestItem) -> (&'static str, &'static str) {
    if test.pass {
        ("pass", "\u{2713}")
    } else if test.fail {
        ("fail", "\u{2717}")
    } else if test.pending {
        ("pending", "\u{25CB}")
    } else if test.skipped {
        ("skipped", "\u{2298}")
    } else {
        ("unknown", "\u{2022}")
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
