pub mod endpoint;
pub mod http;
pub mod stream;

/// One wire frame: per-core utilization percentages, ordered by core index.
pub type Sample = Vec<f64>;

/// What a network task learned on one completion. Each update fully replaces
/// the previous view; nothing is diffed or retained across updates.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Pretty-printed body for the raw JSON view.
    RawJson(String),
    /// Parsed per-core sample for the bar views.
    Bars(Sample),
    /// Non-success HTTP status; the bar view shows the error placeholder.
    BadStatus(u16),
    /// Transport or parse failure. Logged, previous view kept.
    FetchFailed(String),
    /// The live stream ended; no reconnection is attempted.
    StreamClosed,
}

pub fn parse_sample(text: &str) -> Result<Sample, serde_json::Error> {
    serde_json::from_str(text)
}
