//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command, Error};
use lifestat_lib::{Classifier, Config, Pattern, Simulation, STANDARD_TEMPLATES};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) simulation: Simulation,
    pub(crate) generations: Option<u64>,
    pub(crate) save: Option<PathBuf>,
    pub(crate) json: bool,
    pub(crate) show: bool,
}

fn app() -> Command {
    command!()
        .long_about(
            "Runs Conway's Game of Life on a toroidal grid\n\
             \n\
             Every generation, the living cells are split into connected groups, \
             and each group is compared with a library of known shapes. \
             The run stops when the number of living cells has not changed \
             for a number of generations, or after a fixed number of generations.\n\
             \n\
             Snapshots and templates are text files with one line per row, \
             '1' for a living cell and '0' for a dead one.\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file (JSON, YAML or TOML)")
                .long_help(
                    "Configuration file (JSON, YAML or TOML)\n\
                     Fields: width, height, cellSize, lifeDensity, stableThreshold.\n\
                     The format is chosen by the file extension; JSON is the default.\n",
                )
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("TEMPLATES")
                .help("Directory of template files")
                .long_help(
                    "Directory of template files\n\
                     Loads block.txt, box.txt, glider.txt, hive.txt, long_ship.txt, \
                     pond.txt and snake.txt from this directory instead of the \
                     built-in templates.\n",
                )
                .short('t')
                .long("templates")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Maximal number of generations")
                .long_help(
                    "Maximal number of generations\n\
                     If this value is set to 0, it runs until the population is stable.\n",
                )
                .short('g')
                .long("generations")
                .default_value("0")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("THRESHOLD")
                .help("Number of equal population counts in a row that means stable")
                .long("threshold")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("LOAD")
                .help("Restores the world from a snapshot before the run")
                .short('l')
                .long("load")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SAVE")
                .help("Saves the world to a snapshot after the run")
                .short('s')
                .long("save")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("PLACE")
                .help("Stamps a template or a pattern file at (X, Y)")
                .long_help(
                    "Stamps a template or a pattern file at (X, Y)\n\
                     NAME is a template name, or else the path of a pattern file.\n\
                     Coordinates wrap around. May be given several times.\n",
                )
                .short('p')
                .long("place")
                .num_args(3)
                .value_names(["NAME", "X", "Y"])
                .allow_negative_numbers(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("JSON")
                .help("Prints one JSON report per generation")
                .long("json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("SHOW")
                .help("Prints the world every generation")
                .long("show")
                .action(ArgAction::SetTrue),
        )
}

/// Reads the configuration. The format depends on the extension.
fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        _ => serde_json::from_str(&text).map_err(|e| e.to_string()),
    };
    config.map_err(|e| format!("{}: {}", path.display(), e))
}

/// Resolves a `--place` argument to a pattern.
fn find_pattern(classifier: &Classifier, name: &str) -> Result<Pattern, String> {
    match classifier.templates().iter().find(|t| t.name() == name) {
        Some(template) => Ok(template.pattern().clone()),
        None => Pattern::load(name).map_err(|e| e.to_string()),
    }
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut app = app();
        let matches = app.try_get_matches_from_mut(std::env::args_os())?;
        Args::from_matches(&matches).map_err(|e| app.error(ErrorKind::InvalidValue, e))
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if let Some(&threshold) = matches.get_one::<usize>("THRESHOLD") {
            config = config.set_stable_threshold(threshold);
        }
        log::debug!("Configuration: {:?}", config);

        let classifier = match matches.get_one::<PathBuf>("TEMPLATES") {
            Some(dir) => {
                let files: Vec<String> = STANDARD_TEMPLATES
                    .iter()
                    .map(|(name, _)| format!("{}.txt", name))
                    .collect();
                Classifier::load(dir, &files)
            }
            None => Classifier::standard(),
        }
        .map_err(|e| e.to_string())?;

        let mut simulation =
            Simulation::from_config(&config, classifier).map_err(|e| e.to_string())?;

        if let Some(path) = matches.get_one::<PathBuf>("LOAD") {
            simulation
                .load_snapshot_file(path)
                .map_err(|e| e.to_string())?;
        }

        if let Some(occurrences) = matches.get_occurrences::<String>("PLACE") {
            for values in occurrences {
                let values: Vec<&String> = values.collect();
                let (name, x, y) = match values.as_slice() {
                    [name, x, y] => (name, x, y),
                    _ => return Err(String::from("--place takes NAME X Y")),
                };
                let x: isize = x.parse().map_err(|e| format!("invalid X {:?}: {}", x, e))?;
                let y: isize = y.parse().map_err(|e| format!("invalid Y {:?}: {}", y, e))?;
                let pattern = find_pattern(simulation.classifier(), name)?;
                simulation.world_mut().place(&pattern, x, y);
            }
        }

        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0);
        let generations = match generations {
            0 => None,
            i => Some(i),
        };

        Ok(Args {
            simulation,
            generations,
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            json: matches.get_flag("JSON"),
            show: matches.get_flag("SHOW"),
        })
    }
}
