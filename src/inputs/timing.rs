/// One named interval on a timing track, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimingInterval {
    /// Interval label (unused by the core, carried for hosts).
    #[serde(default)]
    pub label: String,
    /// Interval start in milliseconds.
    pub start_ms: u64,
    /// Interval end in milliseconds.
    pub end_ms: u64,
}

/// An externally defined sequence of named time intervals used as a spawn
/// clock in timing-track trigger mode.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimingTrack {
    /// Track name, matched against the configured selector.
    pub name: String,
    /// Intervals in track order.
    pub intervals: Vec<TimingInterval>,
}

/// Caller-supplied timing track lookup.
///
/// "Track not found" is a valid outcome and silently degrades the trigger
/// mode to continuous for the frame.
pub trait TimingSource {
    /// Track named `name`, if the host knows it.
    fn track(&self, name: &str) -> Option<&TimingTrack>;
}

/// Lookup by name over a plain track list.
impl TimingSource for [TimingTrack] {
    fn track(&self, name: &str) -> Option<&TimingTrack> {
        self.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inputs/timing.rs"]
mod tests;
