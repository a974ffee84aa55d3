use std::sync::Mutex;

/// Receiver for non-fatal diagnostics. Invalid viewer options degrade to
/// a warning through this seam instead of failing the operation, so the
/// host decides where warnings land.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Default sink: warnings go to stderr with a `Warning:` prefix.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}

/// Sink that buffers warnings in memory. Used by tests and by hosts that
/// want to surface warnings themselves.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings collected so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(e) => {
                eprintln!("Warning: diagnostic sink lock poisoned: {}", e);
                Vec::new()
            }
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(e) => eprintln!("Warning: diagnostic sink lock poisoned: {}", e),
        }
    }
}

/// Emit the standard rejection message for an enumerated option: names
/// the property, the rejected value, and the accepted set.
pub fn warn_invalid_option(sink: &dyn DiagnosticSink, property: &str, value: &str, options: &[&str]) {
    sink.warn(&format!(
        "'{}' is not a valid option for property: '{}'. Valid options are: {}",
        value,
        property,
        options.join(", ")
    ));
}
