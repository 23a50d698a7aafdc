//! # Unrecognized-Status Diagnostics
//!
//! The resolver warns when it cannot classify a value and stays silent
//! otherwise. Bulk operations report a batch once instead of per record.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use hedu_status::{StatusEngine, StatusFilter, ABSENT_STATUS};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a WARN-level subscriber and return everything it logged.
fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn warn_lines(logs: &str) -> usize {
    logs.lines().filter(|l| l.contains("WARN")).count()
}

// ── Single values ───────────────────────────────────────────────────

#[test]
fn recognized_values_log_nothing() {
    let engine = StatusEngine::standard();
    let logs = capture(|| {
        for raw in ["pending", "rejected", "verified", "approved", "accepted", "refused"] {
            assert!(engine.resolve(raw).is_recognized());
        }
    });
    assert_eq!(logs, "");
}

#[test]
fn unknown_value_logs_plain_raw_string() {
    let engine = StatusEngine::standard();
    let logs = capture(|| {
        engine.resolve("archived");
    });
    assert_eq!(warn_lines(&logs), 1);
    assert!(logs.contains("unrecognized content status"));
    assert!(logs.contains("raw=\"archived\""), "{logs}");
    assert!(logs.contains("absent=false"), "{logs}");
    assert!(!logs.contains("Some("), "{logs}");
}

#[test]
fn absent_value_logs_marker() {
    let engine = StatusEngine::standard();
    let logs = capture(|| {
        engine.resolve(None);
    });
    assert_eq!(warn_lines(&logs), 1);
    assert!(logs.contains(ABSENT_STATUS), "{logs}");
    assert!(logs.contains("absent=true"), "{logs}");
}

#[test]
fn predicates_on_unknown_value_warn() {
    let engine = StatusEngine::standard();
    let logs = capture(|| {
        assert!(!engine.is_public("archived"));
    });
    assert_eq!(warn_lines(&logs), 1);
}

#[test]
fn classify_is_silent() {
    let engine = StatusEngine::standard();
    let logs = capture(|| {
        assert!(!engine.classify("archived").is_recognized());
        assert!(!engine.classify(None).is_recognized());
    });
    assert_eq!(logs, "");
}

// ── Batches ─────────────────────────────────────────────────────────

#[test]
fn summarize_warns_once_per_batch() {
    let engine = StatusEngine::standard();
    let items = ["archived", "archived", "draft", "deleted", "gone", "approved"];
    let logs = capture(|| {
        let summary = engine.summarize(&items);
        assert_eq!(summary.unrecognized, 5);
    });
    assert_eq!(warn_lines(&logs), 1, "{logs}");
    assert!(logs.contains("unrecognized=5"), "{logs}");
    assert!(logs.contains("archived"), "{logs}");
}

#[test]
fn summarize_clean_batch_is_silent() {
    let engine = StatusEngine::standard();
    let logs = capture(|| {
        engine.summarize(&["pending", "approved", "refused"]);
    });
    assert_eq!(logs, "");
}

#[test]
fn filter_warns_once_per_batch() {
    let engine = StatusEngine::standard();
    let items = ["archived", "draft", "verified", "deleted"];
    let logs = capture(|| {
        let public = engine.filter(&items, StatusFilter::Public);
        assert_eq!(public, vec![&"verified"]);
    });
    assert_eq!(warn_lines(&logs), 1, "{logs}");
    assert!(logs.contains("unrecognized=3"), "{logs}");
}
