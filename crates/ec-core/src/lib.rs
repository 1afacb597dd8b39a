//! `ec-core` — foundational types for the edge mobility simulator.
//!
//! Every other `ec-*` crate depends on this one.  It has no `ec-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `DeviceId`, `PlaceId`, `AttractivenessClass`          |
//! | [`time`]   | `SimTime`, `SimConfig`                                |
//! | [`rng`]    | `SimRng` (seedable, with derived child streams)       |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AttractivenessClass, DeviceId, PlaceId};
pub use rng::SimRng;
pub use time::{SimConfig, SimTime};
