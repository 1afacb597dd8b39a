//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use ec_catalog::PlaceCatalog;
use ec_core::{SimConfig, SimTime};
use ec_mobility::{MobilityKind, MobilityModel};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                   |
/// |------------------|---------------------------|
/// | `.kind(k)`       | `MobilityKind::Nomadic`   |
/// | `.start_time(t)` | `SimTime::ZERO`           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .kind(MobilityKind::Nomadic)
///     .build(Arc::new(catalog))?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    kind:   MobilityKind,
    start:  SimTime,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            kind: MobilityKind::default(),
            start: SimTime::ZERO,
        }
    }

    /// Select the mobility model [`build`][Self::build] constructs.
    pub fn kind(mut self, kind: MobilityKind) -> Self {
        self.kind = kind;
        self
    }

    /// Clock reading at initialization.  Must not be after `end_time`.
    pub fn start_time(mut self, start: SimTime) -> Self {
        self.start = start;
        self
    }

    /// Validate the config and build the selected model over `catalog`.
    pub fn build(self, catalog: Arc<PlaceCatalog>) -> SimResult<Sim<Box<dyn MobilityModel>>> {
        self.validate()?;
        let model = self
            .kind
            .build(catalog, self.config.device_count, self.config.seed)?;
        Ok(Sim::new(self.config, self.start, model))
    }

    /// Validate the config and wrap an already-constructed model.
    ///
    /// The model must track exactly `config.device_count` devices.
    pub fn build_with<M: MobilityModel>(self, model: M) -> SimResult<Sim<M>> {
        self.validate()?;
        let got = model.state().device_count();
        if got != self.config.device_count {
            return Err(SimError::DeviceCountMismatch {
                expected: self.config.device_count,
                got,
            });
        }
        Ok(Sim::new(self.config, self.start, model))
    }

    fn validate(&self) -> SimResult<()> {
        self.config.validate()?;
        SimTime::try_from_secs(self.start.secs())?;
        if self.start > self.config.end_time {
            return Err(SimError::Config(format!(
                "start time {} is after end time {}",
                self.start, self.config.end_time
            )));
        }
        Ok(())
    }
}
