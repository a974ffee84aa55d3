use crate::report::visible_roots;
use crate::results::results_model::{Suite, TestItem};
use crate::view::session::ReportSession;

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems (Jenkins, GitHub Actions,
/// GitLab CI).
///
/// The suite tree is flattened into one `<testsuite>` per suite that owns
/// tests, named by its dotted path. Counts in the XML are counts of the
/// filtered view, so what CI ingests matches what the other renderers
/// show.
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuites name="Test Run" tests="3" failures="1" time="1.234">
///   <testsuite name="Checkout" tests="3" failures="1" skipped="0" time="0.310">
///     <testcase name="renders the order summary" classname="Checkout" time="0.012" />
///     <testcase name="submits the payment form" classname="Checkout" time="0.040">
///       <failure message="Expected status 200 but got 500" type="AssertionFailure">...</failure>
///     </testcase>
///   </testsuite>
/// </testsuites>
/// ```
pub fn generate_junit_xml(session: &ReportSession) -> String {
    let suites = session.suites();
    let roots = visible_roots(&suites);

    let mut flat: Vec<(String, &Suite)> = Vec::new();
    for suite in &roots {
        collect_suites(suite, "", &mut flat);
    }

    let total_tests: usize = flat.iter().map(|(_, suite)| suite.tests.len()).sum();
    let total_failures: usize = flat
        .iter()
        .map(|(_, suite)| suite.tests.iter().filter(|t| t.fail).count())
        .sum();

    let mut body = String::new();
    for (name, suite) in &flat {
        render_testsuite(name, suite, &mut body);
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\" time=\"{time:.3}\">\n{body}</testsuites>\n",
        name = escape_xml(session.report_title().unwrap_or("Test Run")),
        tests = total_tests,
        failures = total_failures,
        time = session.stats().duration as f64 / 1000.0,
        body = body,
    )
}

/// Depth-first flatten: a suite contributes an entry when it owns tests,
/// and always passes its dotted path down to its children.
fn collect_suites<'a>(suite: &'a Suite, parent: &str, out: &mut Vec<(String, &'a Suite)>) {
    let name = if parent.is_empty() {
        suite.display_title().to_string()
    } else {
        format!("{}.{}", parent, suite.display_title())
    };
    if !suite.tests.is_empty() {
        out.push((name.clone(), suite));
    }
    for child in &suite.suites {
        collect_suites(child, &name, out);
    }
}

fn render_testsuite(name: &str, suite: &Suite, out: &mut String) {
    let failures = suite.tests.iter().filter(|t| t.fail).count();
    let skipped = suite
        .tests
        .iter()
        .filter(|t| t.pending || t.skipped)
        .count();

    out.push_str(&format!(
        "  <testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\" skipped=\"{skipped}\" time=\"{time:.3}\">\n",
        name = escape_xml(name),
        tests = suite.tests.len(),
        failures = failures,
        skipped = skipped,
        time = suite.duration as f64 / 1000.0,
    ));

    for test in &suite.tests {
        render_testcase(name, test, out);
    }

    out.push_str("  </testsuite>\n");
}

fn render_testcase(classname: &str, test: &TestItem, out: &mut String) {
    let open = format!(
        "    <testcase name=\"{name}\" classname=\"{classname}\" time=\"{time:.3}\"",
        name = escape_xml(&test.title),
        classname = escape_xml(classname),
        time = test.duration as f64 / 1000.0,
    );

    if test.fail {
        let message = test
            .err
            .as_ref()
            .and_then(|err| err.message.as_deref())
            .unwrap_or("test failed");
        let stack = test
            .err
            .as_ref()
            .and_then(|err| err.estack.as_deref())
            .unwrap_or_default();
        out.push_str(&format!(
            "{open}>\n      <failure message=\"{message}\" type=\"AssertionFailure\">{body}</failure>\n    </testcase>\n",
            open = open,
            message = escape_xml(message),
            body = escape_xml(stack),
        ));
    } else if test.pending || test.skipped {
        out.push_str(&format!("{}>\n      <skipped />\n    </testcase>\n", open));
    } else {
        out.push_str(&format!("{} />\n", open));
    }
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
