//! Defines data structures of command line arguments.

use clap;
use std::path::PathBuf;

pub const DEFAULT_SAMPLES_DIR: &str = "samples";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Solve { name: String },
    List,
    Test { name: String, num: Option<usize> },
    Eg { name: String, count: usize },
}

#[derive(Debug)]
pub struct Config {
    pub samples_dir: PathBuf,
    pub command: Command,
}

fn parse_num(value: Option<&str>) -> Option<usize> {
    value.and_then(|s| match s.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("ignoring invalid number {:?}", s);
            None
        }
    })
}

fn name_of(sm: &clap::ArgMatches) -> String {
    sm.value_of("name").unwrap_or_default().to_owned()
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Self {
        let command = match gm.subcommand() {
            ("solve", Some(sm)) => Command::Solve { name: name_of(sm) },
            ("test", Some(sm)) => {
                let num = parse_num(sm.value_of("num"));
                trace!("test {:?} {:?}", sm.value_of("name"), num);
                Command::Test {
                    name: name_of(sm),
                    num,
                }
            }
            ("eg", Some(sm)) => Command::Eg {
                name: name_of(sm),
                count: parse_num(sm.value_of("count")).unwrap_or(1),
            },
            ("list", _) => Command::List,
            _ => {
                error!("unknown subcommand");
                Command::List
            }
        };

        // Global option may come before or after the subcommand.
        let samples_dir = gm
            .subcommand()
            .1
            .and_then(|sm| sm.value_of("samples-dir"))
            .or_else(|| gm.value_of("samples-dir"))
            .unwrap_or(DEFAULT_SAMPLES_DIR);
        let samples_dir = PathBuf::from(samples_dir);

        Config {
            samples_dir,
            command,
        }
    }
}
