mod sheets_sink;
mod sink_factory;

pub use sheets_sink::{DEFAULT_SHEET_RANGE, DEFAULT_SHEETS_API_URL, SheetsResultSink};
pub use sink_factory::ResultSinkFactory;
