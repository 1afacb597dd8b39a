//! `ec-sim` — discrete-event runner for mobility models.
//!
//! # Event loop
//!
//! ```text
//! initialize:  model.initialize(kernel)        — arms one event per device
//! loop:
//!   ① pop the earliest event with time <= end_time (FIFO among equal times)
//!   ② emit any occupancy snapshots due before it
//!   ③ advance the clock, call model.move_device(device, kernel)
//!   ④ observer.on_relocation(..)
//! end:         pending events are dropped, invariant verified
//! ```
//!
//! Everything runs on the calling thread.  A mobility error aborts the run
//! and is returned; there is no retry.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ec_core::{SimConfig, SimTime};
//! use ec_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(1_000, 42, SimTime(3_600.0));
//! let mut sim = SimBuilder::new(config).build(catalog)?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::EventQueue;
pub use sim::{RunSummary, Sim};
