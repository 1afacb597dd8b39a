//! Per-device current place and per-place occupancy.

use ec_core::{AttractivenessClass, DeviceId, PlaceId};

use crate::{MobilityError, MobilityResult};

/// Where a device is attached: the place and its attractiveness class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub place: PlaceId,
    pub class: AttractivenessClass,
}

/// Place-index sentinel for a device that has not been placed yet.
const UNPLACED: usize = usize::MAX;

/// Structure-of-arrays mobility state.
///
/// `current[d]` is the catalog *index* (not id) of device `d`'s place;
/// `occupancy[p]` counts devices at place index `p`.  Once every device is
/// placed, `occupancy` sums to the device count and each entry equals the
/// number of devices pointing at it.  [`place`][Self::place] and
/// [`relocate`][Self::relocate] keep both arrays in step; [`verify`][Self::verify]
/// recomputes the counts from scratch.
#[derive(Clone, Debug)]
pub struct MobilityState {
    current:   Vec<usize>,
    occupancy: Vec<u32>,
}

impl MobilityState {
    /// All devices unplaced, all counters zero.
    pub fn new(device_count: usize, place_count: usize) -> Self {
        Self {
            current:   vec![UNPLACED; device_count],
            occupancy: vec![0; place_count],
        }
    }

    #[inline]
    pub fn device_count(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn place_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Place index of `device`, or `None` if unknown or not yet placed.
    #[inline]
    pub fn place_index(&self, device: DeviceId) -> Option<usize> {
        self.current
            .get(device.index())
            .copied()
            .filter(|&p| p != UNPLACED)
    }

    /// Devices at place index `place`, or `None` if out of range.
    #[inline]
    pub fn occupancy(&self, place: usize) -> Option<u32> {
        self.occupancy.get(place).copied()
    }

    /// Occupancy of every place, indexed by catalog order.
    #[inline]
    pub fn occupancy_all(&self) -> &[u32] {
        &self.occupancy
    }

    /// Attach a not-yet-placed `device` to place index `place`.
    pub fn place(&mut self, device: DeviceId, place: usize) -> MobilityResult<()> {
        let slot = self
            .current
            .get_mut(device.index())
            .ok_or(MobilityError::UnknownDevice(device))?;
        if *slot != UNPLACED {
            return Err(MobilityError::InvariantViolation(format!(
                "{device} placed twice"
            )));
        }
        let count = self.occupancy.get_mut(place).ok_or_else(|| {
            MobilityError::InvariantViolation(format!("place index {place} out of range"))
        })?;
        *count += 1;
        *slot = place;
        Ok(())
    }

    /// Move a placed `device` to place index `to`.  Returns the index it left.
    pub fn relocate(&mut self, device: DeviceId, to: usize) -> MobilityResult<usize> {
        let from = *self
            .current
            .get(device.index())
            .ok_or(MobilityError::UnknownDevice(device))?;
        if from == UNPLACED {
            return Err(MobilityError::InvariantViolation(format!(
                "{device} relocated before being placed"
            )));
        }
        if to >= self.occupancy.len() {
            return Err(MobilityError::InvariantViolation(format!(
                "place index {to} out of range"
            )));
        }

        let left = &mut self.occupancy[from];
        *left = left.checked_sub(1).ok_or_else(|| {
            MobilityError::InvariantViolation(format!(
                "occupancy of place index {from} would go negative"
            ))
        })?;
        self.occupancy[to] += 1;
        self.current[device.index()] = to;
        Ok(from)
    }

    /// Recompute occupancy from the device array and compare.
    ///
    /// Fails if any device is unplaced, points outside the place range, or a
    /// counter disagrees with the recount.
    pub fn verify(&self) -> MobilityResult<()> {
        let mut recount = vec![0u32; self.occupancy.len()];
        for (d, &p) in self.current.iter().enumerate() {
            if p == UNPLACED {
                return Err(MobilityError::InvariantViolation(format!(
                    "device {d} is not placed"
                )));
            }
            let slot = recount.get_mut(p).ok_or_else(|| {
                MobilityError::InvariantViolation(format!(
                    "device {d} points at place index {p}, out of range"
                ))
            })?;
            *slot += 1;
        }
        if let Some(p) = (0..recount.len()).find(|&p| recount[p] != self.occupancy[p]) {
            return Err(MobilityError::InvariantViolation(format!(
                "place index {p} counts {} devices but {} are there",
                self.occupancy[p], recount[p]
            )));
        }
        Ok(())
    }
}
