//! Fluent builder for constructing a [`Sim`].

use tr_core::{SimConfig, Tick};

use crate::{Sim, SimError, SimResult, TrafficNetwork, VehiclePlacement};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs
///
/// | Method           | Default               |
/// |------------------|-----------------------|
/// | `.vehicles(v)`   | no initial traffic    |
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network)
///     .vehicles(load_vehicles_csv(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    network:  TrafficNetwork,
    vehicles: Vec<VehiclePlacement>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, network: TrafficNetwork) -> Self {
        Self {
            config,
            network,
            vehicles: Vec::new(),
        }
    }

    /// Vehicles to enqueue before the first tick, in order.
    pub fn vehicles(mut self, vehicles: Vec<VehiclePlacement>) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Validate inputs, place the initial vehicles, and return a
    /// ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// `Config` if `total_ticks` is zero; `UnknownLane` if a placement names
    /// a lane the network does not have.
    pub fn build(self) -> SimResult<Sim> {
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be at least 1".into()));
        }

        let mut network = self.network;
        for VehiclePlacement { lane, vehicle } in self.vehicles {
            network
                .lanes
                .get_mut(lane)
                .ok_or(SimError::UnknownLane(lane))?
                .enqueue(vehicle);
        }

        Ok(Sim {
            config:  self.config,
            network,
            now:     Tick::ZERO,
        })
    }
}
