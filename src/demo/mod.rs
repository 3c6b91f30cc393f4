//! Random demo parameters
//!
//! An uncorrelated parameter set for clients that want sound before
//! the first real observation arrives. Unlike the mapping system this
//! is deliberately non-deterministic.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

/// A parameter set drawn from noise instead of weather
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoParams {
    /// Ten standard-normal control values
    pub values: Vec<f64>,
    /// Beats per minute, uniform in [60, 180)
    pub tempo: i32,
    /// Note density, uniform in [0, 1)
    pub density: f64,
    /// Timbre control, uniform in [0, 1)
    pub timbre: f64,
}

/// Draw a demo parameter set from the thread-local RNG
pub fn demo_params() -> DemoParams {
    demo_params_from(&mut rand::thread_rng())
}

/// Draw a demo parameter set from the given RNG
pub fn demo_params_from<R: Rng + ?Sized>(rng: &mut R) -> DemoParams {
    let values = (0..10).map(|_| rng.sample(StandardNormal)).collect();

    DemoParams {
        values,
        tempo: rng.gen_range(60..180),
        density: rng.gen::<f64>(),
        timbre: rng.gen::<f64>(),
    }
}
