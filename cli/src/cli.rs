//! Runs the simulation and prints a report for every generation.

use crate::args::Args;
use lifestat_lib::{Report, Simulation};
use std::error::Error;

fn print_report(
    simulation: &Simulation,
    report: &Report,
    json: bool,
    show: bool,
) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!(
            "Generation {}: {} living cells in {} groups",
            report.generation, report.population, report.group_count
        );
        for (name, count) in report.classification.non_zero() {
            println!("    {}: {}", name, count);
        }
        if report.stable {
            println!("Stable after {} generations.", report.generation);
        }
    }
    if show {
        print!("{}", simulation.world().plaintext());
        println!();
    }
    Ok(())
}

/// Steps until the population is stable or the generation limit is reached.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let Args {
        mut simulation,
        generations,
        save,
        json,
        show,
    } = args;

    log::info!(
        "Running a {}x{} world, {} living cells",
        simulation.world().columns(),
        simulation.world().rows(),
        simulation.world().population()
    );

    let mut report = simulation.observe();
    loop {
        print_report(&simulation, &report, json, show)?;
        if report.stable || generations.map_or(false, |max| report.generation >= max) {
            break;
        }
        report = simulation.step();
    }

    if let Some(path) = save {
        simulation.world().save_snapshot_file(&path)?;
        log::info!("Saved generation {} to {}", report.generation, path.display());
    }
    Ok(())
}
