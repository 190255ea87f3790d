//! Plain data row types written by output backends.

/// Summary of one field tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick: u64,
    /// Run in progress at the end of the tick.
    pub run:  u64,
    /// Dabs that landed on the surface during the tick.
    pub dabs: u64,
}

/// Summary of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub run:        u64,
    pub iterations: u64,
}
