//! Running the world generation by generation.

use crate::{
    classify::{Classification, Classifier},
    config::Config,
    error::Error,
    stability::StabilityDetector,
    world::World,
};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Initial status. Nothing observed yet.
    Initial,
    /// The population is still changing.
    Running,
    /// The population has not changed for enough generations.
    Stable,
}

/// Statistics of one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// The generation.
    pub generation: u64,
    /// Number of living cells.
    pub population: usize,
    /// Number of connected groups of living cells.
    pub group_count: usize,
    /// Number of groups of each shape.
    pub classification: Classification,
    /// Whether the population is stable as of this generation.
    pub stable: bool,
}

/// A world together with the observers that analyse it.
///
/// The classifier and the stability detector only read the world; they
/// never change it.
#[derive(Clone, Debug)]
pub struct Simulation {
    world: World,
    classifier: Classifier,
    detector: StabilityDetector,
    status: Status,
}

impl Simulation {
    /// Creates a simulation.
    pub fn new(world: World, classifier: Classifier, detector: StabilityDetector) -> Self {
        Simulation {
            world,
            classifier,
            detector,
            status: Status::Initial,
        }
    }

    /// Creates a randomly filled world from the configuration, and a
    /// simulation around it.
    pub fn from_config(config: &Config, classifier: Classifier) -> Result<Self, Error> {
        let world = config.world()?;
        log::debug!(
            "Created a {}x{} world with density {}",
            world.columns(),
            world.rows(),
            config.density
        );
        Ok(Simulation::new(
            world,
            classifier,
            StabilityDetector::new(config.stable_threshold),
        ))
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world, mutably, e.g. for placing patterns.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The stability detector.
    pub fn detector(&self) -> &StabilityDetector {
        &self.detector
    }

    /// The status after the last observation.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Analyses the current generation.
    ///
    /// Feeds the population to the stability detector, so it should be
    /// called once per generation.
    pub fn observe(&mut self) -> Report {
        let population = self.world.population();
        let groups = self.world.groups();
        let classification = self.classifier.classify_groups(&groups);
        let stable = self.detector.check(population);
        self.status = if stable {
            Status::Stable
        } else {
            Status::Running
        };
        Report {
            generation: self.world.generation(),
            population,
            group_count: groups.len(),
            classification,
            stable,
        }
    }

    /// Advances the world by one generation and analyses the result.
    pub fn step(&mut self) -> Report {
        self.world.advance();
        self.observe()
    }

    /// Steps until the population is stable.
    ///
    /// Returns [`Status::Stable`] if it becomes stable,
    /// [`Status::Running`] if the number of steps reaches `max_step`
    /// first. With `max_step` set to `None` this never returns if the
    /// population keeps changing.
    pub fn run(&mut self, max_step: Option<u64>) -> Status {
        if self.status == Status::Initial {
            self.observe();
        }
        let mut step_count = 0;
        while self.status != Status::Stable {
            if let Some(max) = max_step {
                if step_count >= max {
                    break;
                }
            }
            self.step();
            step_count += 1;
        }
        self.status
    }

    /// Restores the world from a snapshot and forgets the population history.
    pub fn load_snapshot(&mut self, origin: &str, text: &str) -> Result<(), Error> {
        self.world.load_snapshot(origin, text)?;
        self.restart();
        Ok(())
    }

    /// Restores the world from a snapshot file and forgets the population history.
    pub fn load_snapshot_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        self.world.load_snapshot_file(path)?;
        self.restart();
        Ok(())
    }

    fn restart(&mut self) {
        self.detector.reset();
        self.status = Status::Initial;
    }
}
