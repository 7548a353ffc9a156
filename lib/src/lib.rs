//! A toroidal [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life),
//! with tools to analyse each generation:
//!
//! * splitting the living cells into connected groups,
//! * classifying the groups against a library of known shapes,
//! * detecting when the population stops changing.
//!
//! # Example
//!
//! ```rust
//! use lifestat_lib::{Classifier, Config, Simulation, Status};
//!
//! let config = Config::new(32, 32, 1).set_density(0.0);
//! let mut simulation = Simulation::from_config(&config, Classifier::standard()?)?;
//!
//! // A block never changes.
//! let block = lifestat_lib::Pattern::parse("block", "11\n11\n")?;
//! simulation.world_mut().place(&block, 5, 5);
//!
//! assert_eq!(simulation.run(Some(100)), Status::Stable);
//! let report = simulation.observe();
//! assert_eq!(report.classification["block"], 1);
//! # Ok::<(), lifestat_lib::Error>(())
//! ```

mod cells;
mod classify;
mod config;
mod error;
mod group;
mod pattern;
mod save;
mod simulation;
mod stability;
mod world;

pub use cells::{Coord, LifeCell, State, ALIVE, DEAD};
pub use classify::{Classification, Classifier, Template, STANDARD_TEMPLATES, UNKNOWN};
pub use config::Config;
pub use error::Error;
pub use group::Group;
pub use pattern::Pattern;
pub use simulation::{Report, Simulation, Status};
pub use stability::{StabilityDetector, DEFAULT_THRESHOLD};
pub use world::World;
