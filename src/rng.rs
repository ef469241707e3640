//! Entropy seeding from hardware state.
//!
//! The V5 Brain has no hardware random number generator, but battery
//! telemetry jitters from run to run and the high-resolution uptime clock
//! never repeats across a session. Folding the two together gives a seed
//! that is different every boot, which is all a match-strategy shuffle or
//! a randomized autonomous delay needs.
//!
//! This is not cryptographic randomness and must not be used as such.

use vexide::{battery, time::user_uptime};

/// Returns a pseudo-random seed derived from battery telemetry and the
/// user-program uptime.
///
/// Feed it to any PRNG:
///
/// ```ignore
/// let seed = talos::rng::entropy_seed();
/// log::info!("session seed {:#x}", seed);
/// ```
pub fn entropy_seed() -> u64 {
    let millivolts = (battery::voltage() * 1000.0) as u64;
    let centiamps = (battery::current() * 100.0) as u64;
    let micros = user_uptime().as_micros() as u64;

    micros
        .wrapping_add(millivolts.rotate_left(24))
        .wrapping_add(centiamps.rotate_left(48))
}
