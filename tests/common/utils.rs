use std::path::PathBuf;

use report_lens::results::results_model::{
    Hook, ReportDocument, Suite, TestError, TestItem, TestStats,
};

/// Absolute path to a fixture under tests/fixtures/.
pub fn fixture(name: &str) -> PathBuf {
    let base = std::env::current_dir().unwrap();
    base.join("tests").join("fixtures").join(name)
}

pub fn suite(uuid: &str, title: &str) -> Suite {
    Suite {
        uuid: uuid.to_string(),
        title: title.to_string(),
        full_file: None,
        suites: Vec::new(),
        tests: Vec::new(),
        before_hooks: Vec::new(),
        after_hooks: Vec::new(),
        duration: 0,
        root: false,
    }
}

fn test_item(uuid: &str, title: &str) -> TestItem {
    TestItem {
        uuid: uuid.to_string(),
        title: title.to_string(),
        full_title: None,
        duration: 10,
        speed: None,
        pass: false,
        fail: false,
        pending: false,
        skipped: false,
        code: None,
        err: None,
        context: None,
    }
}

pub fn passing(title: &str) -> TestItem {
    TestItem {
        pass: true,
        ..test_item(&format!("t-{}", title), title)
    }
}

pub fn failing(title: &str) -> TestItem {
    TestItem {
        fail: true,
        err: Some(TestError {
            message: Some("Expected status 200 but got 500".to_string()),
            estack: Some(
                "AssertionError: Expected status 200 but got 500\n    at Context.<anonymous>"
                    .to_string(),
            ),
            diff: None,
        }),
        ..test_item(&format!("t-{}", title), title)
    }
}

pub fn pending(title: &str) -> TestItem {
    TestItem {
        pending: true,
        duration: 0,
        ..test_item(&format!("t-{}", title), title)
    }
}

pub fn skipped(title: &str) -> TestItem {
    TestItem {
        skipped: true,
        duration: 0,
        ..test_item(&format!("t-{}", title), title)
    }
}

pub fn hook(title: &str, fail: bool, context: Option<&str>) -> Hook {
    Hook {
        uuid: format!("h-{}", title),
        title: title.to_string(),
        fail,
        context: context.map(|c| c.to_string()),
        duration: 5,
        err: if fail {
            Some(TestError {
                message: Some("hook blew up".to_string()),
                estack: None,
                diff: None,
            })
        } else {
            None
        },
    }
}

pub fn stats(tests: u32, passes: u32, failures: u32, pending: u32, skipped: u32) -> TestStats {
    TestStats {
        suites: 2,
        tests,
        passes,
        failures,
        pending,
        skipped,
        duration: 152,
        pass_percent: if tests > 0 {
            passes as f64 * 100.0 / tests as f64
        } else {
            0.0
        },
        start: Some("2024-03-01T10:00:00.000Z".to_string()),
        end: Some("2024-03-01T10:00:15.000Z".to_string()),
    }
}

/// Document with a bare root wrapper around one main suite (two passing
/// tests, one failing) and a nested suite holding one skipped test.
pub fn sample_document() -> ReportDocument {
    let mut nested = suite("s-nested", "Legacy Export");
    nested.tests.push(skipped("exports the old receipt format"));

    let mut main = suite("s-main", "Checkout");
    main.full_file = Some("specs/checkout.spec.js".to_string());
    main.duration = 62;
    main.tests.push(passing("renders the order summary"));
    main.tests.push(passing("applies a discount code"));
    main.tests.push(failing("submits the payment form"));
    main.suites.push(nested);

    let mut root = suite("s-root", "");
    root.root = true;
    root.suites.push(main);

    ReportDocument {
        stats: stats(4, 2, 1, 0, 1),
        suites: root,
        report_title: Some("Storefront Run".to_string()),
    }
}
