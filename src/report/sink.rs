//! Report output sinks

use tracing::info;

/// Receives report lines in order, as they are produced.
pub trait ReportSink: Send {
    fn line(&mut self, line: String);
}

/// Emits every line as an `info` event on the `swapi_demo::report` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn line(&mut self, line: String) {
        info!(target: "swapi_demo::report", "{}", line);
    }
}

/// Collects lines in memory.
impl ReportSink for Vec<String> {
    fn line(&mut self, line: String) {
        self.push(line);
    }
}
