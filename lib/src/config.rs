//! World configuration.

use crate::{error::Error, stability::DEFAULT_THRESHOLD, world::World};
use derivative::Derivative;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
///
/// The number of columns and rows is `width / cell_size` and
/// `height / cell_size`. Remainders are dropped.
#[derive(Clone, Debug, Derivative, PartialEq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Config {
    /// Width.
    #[derivative(Default(value = "100"))]
    pub width: usize,

    /// Height.
    #[derivative(Default(value = "100"))]
    pub height: usize,

    /// Size of a cell, in the same unit as width and height.
    #[derivative(Default(value = "1"))]
    #[cfg_attr(feature = "serde", serde(alias = "cell_size"))]
    pub cell_size: usize,

    /// Probability that a cell is alive in the initial random fill.
    ///
    /// Values outside `[0, 1]` are not rejected: anything below `0`
    /// gives an empty world, anything above `1` a full one.
    #[derivative(Default(value = "0.1"))]
    #[cfg_attr(feature = "serde", serde(alias = "lifeDensity", alias = "life_density"))]
    pub density: f64,

    /// Number of consecutive equal population counts after which the
    /// world is considered stable.
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    #[cfg_attr(feature = "serde", serde(alias = "stable_threshold"))]
    pub stable_threshold: usize,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        Config {
            width,
            height,
            cell_size,
            ..Config::default()
        }
    }

    /// Sets the initial density.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the stability threshold.
    pub fn set_stable_threshold(mut self, stable_threshold: usize) -> Self {
        self.stable_threshold = stable_threshold;
        self
    }

    /// Number of columns. `0` if the cell size is `0`.
    pub fn columns(&self) -> usize {
        self.width.checked_div(self.cell_size).unwrap_or(0)
    }

    /// Number of rows. `0` if the cell size is `0`.
    pub fn rows(&self) -> usize {
        self.height.checked_div(self.cell_size).unwrap_or(0)
    }

    /// Checks the dimensions and creates an empty world.
    pub fn blank_world(&self) -> Result<World, Error> {
        if self.width == 0 || self.height == 0 || self.cell_size == 0 {
            return Err(Error::NonPositiveError);
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(Error::EmptyWorldError {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        World::new(self.columns(), self.rows())
    }

    /// Creates a new world from the configuration, filled at random
    /// with the configured density.
    pub fn world(&self) -> Result<World, Error> {
        let mut world = self.blank_world()?;
        world.randomize(self.density);
        Ok(world)
    }

    /// Same as [`world`](Self::world), with the given random number generator.
    pub fn world_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<World, Error> {
        let mut world = self.blank_world()?;
        world.randomize_with(self.density, rng);
        Ok(world)
    }
}
