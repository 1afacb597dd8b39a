//! Plain data row types written by output backends.

/// One relocation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelocationRow {
    pub time:         f64,
    pub device_id:    u32,
    pub from_place:   u32,
    pub to_place:     u32,
    pub dwell:        f64,
    pub next_move_at: f64,
}

/// Devices at one place at a snapshot instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyRow {
    /// Snapshot time in simulated seconds.
    pub time:         f64,
    pub place_id:     u32,
    pub device_count: u32,
}
