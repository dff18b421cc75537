//! Physical parameters for the mechanics scenes.
//!
//! `Parameters` holds every physical constant used by the models:
//! - gravity, rod length and the two masses for the sliding pendulum,
//! - mass, wall half-width and well depth scale for the potential well,
//! - the total energy selecting a particular well trajectory
//!
//! There is no module-level state: the models read everything from here.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational acceleration
    pub l: f64, // pendulum rod length
    pub m1: f64, // mass of the sliding (top) particle
    pub m2: f64, // mass of the bob (bottom) particle
    pub m: f64, // mass of the well particle
    pub a: f64, // well half-width, walls at x = +-a
    pub v0: f64, // well depth scale V_0
    pub energy: f64, // total energy E of the well particle
}
