//! Seeded randomness for traffic generation.
//!
//! Stepping an intersection never draws a random number.  Randomness only
//! enters when a driver invents traffic (classes, routes, arrival times),
//! and every such draw goes through `SimRng` so a seed replays a run.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// Odd multiplier spreading stream offsets over the seed space.
const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// A reproducible `SmallRng`.
///
/// Not shared between consumers: give each one its own stream via
/// [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// An independent stream.  Different `offset`s give different streams
    /// even when drawn at the same point of the parent.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let base = self.0.next_u64();
        Self::new(base ^ offset.wrapping_mul(STREAM_SPREAD))
    }

    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`; `p` outside `[0, 1]` is clamped.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
