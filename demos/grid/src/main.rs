//! grid: four-corner ring road demo for the rust_traffic simulator.
//!
//! Vehicles arrive at random on the four entry lanes, circle the express
//! ring for a few corners and leave through an exit lane.  Lane snapshots
//! and per-tick summaries are written as CSV.
//!
//! ```text
//! grid [CONFIG_JSON] [VEHICLES_CSV] [OUTPUT_DIR]
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow individual ticks and
//! motorcycle overtakes.

mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tr_core::{IntersectionId, LaneId, SimConfig, SimRng, Tick, Vehicle, VehicleClass, VehicleId};
use tr_intersection::Movement;
use tr_lane::LaneStore;
use tr_output::{CsvWriter, OutputWriter, SimOutputObserver};
use tr_sim::{SimBuilder, SimObserver, load_vehicles_csv, random_route};

use network::{GridLanes, build_network};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/grid";
const RNG_STREAM_SPAWN:   u64  = 1;
const RNG_STREAM_ROUTE:   u64  = 2;

// ── Config ────────────────────────────────────────────────────────────────────

/// Demo configuration: the simulator's own settings plus traffic generation.
#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    #[serde(flatten)]
    sim: SimConfig,

    /// Chance per tick per entry lane that a new vehicle arrives.
    arrival_probability: f64,

    /// Corners a generated vehicle passes before it looks for an exit.
    max_hops: usize,

    /// Shares of generated traffic, in the order car, bus, motorcycle.
    class_weights: [u32; 3],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:                 SimConfig { total_ticks: 200, ..SimConfig::default() },
            arrival_probability: 0.3,
            max_hops:            3,
            class_weights:       [6, 1, 3],
        }
    }
}

fn load_config(path: &Path) -> Result<DemoConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer wrapper to count movements ───────────────────────────────────────

struct CountingObserver<'a, W: OutputWriter> {
    inner:      SimOutputObserver<W>,
    exits:      &'a [LaneId],
    movements:  [usize; 3],
    departures: usize,
    snapshots:  usize,
}

impl<'a, W: OutputWriter> CountingObserver<'a, W> {
    fn new(inner: SimOutputObserver<W>, exits: &'a [LaneId]) -> Self {
        Self { inner, exits, movements: [0; 3], departures: 0, snapshots: 0 }
    }
}

fn class_slot(class: VehicleClass) -> usize {
    match class {
        VehicleClass::Car        => 0,
        VehicleClass::Bus        => 1,
        VehicleClass::Motorcycle => 2,
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<'_, W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_movement(&mut self, tick: Tick, intersection: IntersectionId, movement: &Movement) {
        self.movements[class_slot(movement.class)] += 1;
        if self.exits.contains(&movement.to_lane) {
            self.departures += 1;
        }
        self.inner.on_movement(tick, intersection, movement);
    }

    fn on_tick_end(&mut self, tick: Tick, moved: usize, in_network: usize) {
        self.inner.on_tick_end(tick, moved, in_network);
    }

    fn on_snapshot(&mut self, tick: Tick, lanes: &LaneStore) {
        self.snapshots += 1;
        self.inner.on_snapshot(tick, lanes);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Traffic generation ────────────────────────────────────────────────────────

fn random_class(rng: &mut SimRng, weights: [u32; 3]) -> VehicleClass {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return VehicleClass::Car;
    }
    let mut pick = rng.gen_range(0..total);
    for (class, w) in [VehicleClass::Car, VehicleClass::Bus, VehicleClass::Motorcycle]
        .into_iter()
        .zip(weights)
    {
        if pick < w {
            return class;
        }
        pick -= w;
    }
    VehicleClass::Car
}

fn occupants(class: VehicleClass, rng: &mut SimRng) -> u32 {
    match class {
        VehicleClass::Car        => rng.gen_range(1..=4),
        VehicleClass::Bus        => rng.gen_range(5..=40),
        VehicleClass::Motorcycle => rng.gen_range(1..=2),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    let vehicles_csv = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    println!("=== grid: rust_traffic ring road ===");
    println!(
        "Ticks: {}  |  Seed: {}  |  Arrival p: {}",
        config.sim.total_ticks, config.sim.seed, config.arrival_probability
    );
    println!();

    // 1. Build the road network.
    let (network, GridLanes { entries, exits, ring }) = build_network()?;
    println!(
        "Road network: {} intersections, {} lanes ({} express ring lanes)",
        network.intersection_count(),
        network.lanes.len(),
        ring.len(),
    );

    // 2. Optional starting vehicles.
    let placements = match &vehicles_csv {
        Some(path) => load_vehicles_csv(path)?,
        None => Vec::new(),
    };
    let mut next_id = placements
        .iter()
        .map(|p| p.vehicle.id().index() + 1)
        .max()
        .unwrap_or(0);
    println!("Loaded {} starting vehicles", placements.len());

    // 3. Build the simulation.
    let mut sim = SimBuilder::new(config.sim.clone(), network)
        .vehicles(placements)
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer), &exits);

    // 5. Run, generating arrivals between ticks.
    let mut root = SimRng::new(config.sim.seed);
    let mut spawn_rng = root.child(RNG_STREAM_SPAWN);
    let mut route_rng = root.child(RNG_STREAM_ROUTE);
    let mut generated = 0usize;

    let t0 = Instant::now();
    info!(ticks = config.sim.total_ticks, "grid run started");
    while sim.current_tick() < config.sim.end_tick() {
        for &entry in &entries {
            if !spawn_rng.gen_bool(config.arrival_probability) {
                continue;
            }
            let class = random_class(&mut spawn_rng, config.class_weights);
            let turns = random_route(&sim.network, entry, &mut route_rng, config.max_hops);
            let vehicle = Vehicle::new(VehicleId::try_from(next_id)?, class, occupants(class, &mut spawn_rng))
                .with_turns(turns);
            sim.inject(entry, vehicle)?;
            next_id += 1;
            generated += 1;
        }
        sim.run_ticks(1, &mut obs);
    }
    obs.on_sim_end(sim.current_tick());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        return Err(e).context("writing simulation output");
    }

    // 6. Summary.
    let [cars, buses, motorcycles] = obs.movements;
    let exited: usize = exits
        .iter()
        .filter_map(|&l| sim.network.lanes.get(l))
        .map(|lane| lane.len())
        .sum();
    println!();
    println!("Simulated {} ticks in {:.2?}", sim.current_tick().0, elapsed);
    println!("Vehicles generated:  {generated}");
    println!("Intersection moves:  {} (car {cars}, bus {buses}, motorcycle {motorcycles})", cars + buses + motorcycles);
    println!("Reached an exit:     {} (now on exit lanes: {exited})", obs.departures);
    println!("Still queued:        {}", sim.network.vehicle_count() - exited);
    println!("Snapshots written:   {}", obs.snapshots);
    println!("Output:              {}", output_dir.display());

    Ok(())
}
