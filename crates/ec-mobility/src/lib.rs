//! `ec-mobility` — where each device is, and when it moves next.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`model`]      | `MobilityModel` trait, `Relocation`, `MobilityKind`        |
//! | [`nomadic`]    | `NomadicMobility` — exponential dwell, random relocation   |
//! | [`stationary`] | `StationaryMobility` — devices never move                  |
//! | [`sampler`]    | `DwellTimeSampler` — one exponential stream per class      |
//! | [`state`]      | `MobilityState`, `Location`                                |
//! | [`scheduler`]  | `MoveScheduler` — the event-kernel seam                    |
//! | [`error`]      | `MobilityError`, `ConfigError`, `MobilityResult<T>`        |
//!
//! # Nomadic movement model
//!
//! Devices are attached to places (edge datacenters / access points) rather
//! than coordinates:
//!
//! 1. `initialize` puts each device, in id order, at a uniformly random
//!    place, draws a dwell time from that place's attractiveness class, and
//!    asks the scheduler for a callback at `now + dwell`.
//! 2. When the callback fires, `move_device` draws the *next* dwell from the
//!    class of the place being left, picks a different place uniformly at
//!    random, updates occupancy, and asks for the next callback at
//!    `now + dwell`.
//!
//! The model never reads a clock or queue of its own; everything goes through
//! the injected [`MoveScheduler`], so tests can drive it with a fake.

pub mod error;
pub mod model;
pub mod nomadic;
pub mod sampler;
pub mod scheduler;
pub mod state;
pub mod stationary;


pub use error::{ConfigError, MobilityError, MobilityResult};
pub use model::{MobilityKind, MobilityModel, Relocation};
pub use nomadic::NomadicMobility;
pub use sampler::DwellTimeSampler;
pub use scheduler::MoveScheduler;
pub use state::{Location, MobilityState};
pub use stationary::StationaryMobility;
