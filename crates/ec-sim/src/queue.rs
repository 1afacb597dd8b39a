//! `EventQueue` — pending relocation events ordered by simulated time.
//!
//! `BTreeMap` gives O(log W) insert and pop, where W is the number of
//! distinct pending timestamps.  Dwell times are continuous, so W is usually
//! close to the device count.  Devices sharing a timestamp are kept in a
//! `VecDeque` and delivered in the order they were scheduled.

use std::collections::{BTreeMap, VecDeque};

use ec_core::{DeviceId, SimTime};

#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, VecDeque<DeviceId>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a relocation of `device` at `at`.
    pub fn push(&mut self, at: SimTime, device: DeviceId) {
        self.inner.entry(at).or_default().push_back(device);
        self.total += 1;
    }

    /// Remove and return the earliest event.
    pub fn pop_next(&mut self) -> Option<(SimTime, DeviceId)> {
        let mut entry = self.inner.first_entry()?;
        let at = *entry.key();
        let device = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.total -= 1;
        Some((at, device))
    }

    /// Like [`pop_next`][Self::pop_next], but only if the earliest event is
    /// due at or before `limit`.
    pub fn pop_due(&mut self, limit: SimTime) -> Option<(SimTime, DeviceId)> {
        match self.next_time() {
            Some(at) if at <= limit => self.pop_next(),
            _ => None,
        }
    }

    /// The earliest pending timestamp, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Drop every pending event.  Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.total;
        self.inner.clear();
        self.total = 0;
        dropped
    }
}
