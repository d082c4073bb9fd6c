#[macro_use]
extern crate clap;
extern crate glob;
#[macro_use]
extern crate log;
extern crate env_logger;
#[cfg(test)]
extern crate tempfile;

mod config;
mod judge;
mod problem;
mod problems;
mod samples;
mod scanner;

use config::{Command, Config};
use problem::Problem;
use scanner::Scanner;
use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

/// Builds CLI app metadata, especially command line arguments format.
fn app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion, SubcommandRequiredElseHelp]
    };
    let name_arg = || {
        clap::Arg::with_name("name")
            .required(true)
            .help("Problem name (e.g. 71A)")
    };
    clap::App::new("cf")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .arg(
            clap::Arg::with_name("samples-dir")
                .long("samples-dir")
                .takes_value(true)
                .number_of_values(1)
                .global(true)
                .help("Path to sample directory (defaults to ./samples)"),
        )
        .subcommand(
            clap::SubCommand::with_name("solve")
                .about("Solve a problem reading the judge input from stdin")
                .arg(name_arg()),
        )
        .subcommand(clap::SubCommand::with_name("list").about("List solved problems"))
        .subcommand(
            clap::SubCommand::with_name("test")
                .about("Test a solution against sample I/O")
                .arg(name_arg())
                .arg(
                    clap::Arg::with_name("num")
                        .takes_value(true)
                        .help("Specific test number (omit to run all)"),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("eg")
                .about("Create sample I/O files for a problem")
                .arg(name_arg())
                .arg(
                    clap::Arg::with_name("count")
                        .takes_value(true)
                        .help("Number of sample sets to create (default: 1)"),
                ),
        )
}

fn parse_args<'a>() -> clap::ArgMatches<'a> {
    app().get_matches()
}

fn lookup(name: &str) -> io::Result<&'static Problem> {
    problem::find(name).ok_or_else(|| {
        let msg = match problem::parse_problem_name(name) {
            Some((contest_id, letter)) => format!(
                "no solution for problem {}{}. Run: cf list",
                contest_id, letter
            ),
            None => format!("invalid problem name {:?}. Use format like 1900A", name),
        };
        io::Error::new(io::ErrorKind::NotFound, msg)
    })
}

fn solve(problem: &Problem) -> io::Result<()> {
    let stdin = io::stdin();
    let mut sc = Scanner::from_reader(stdin.lock())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    (problem.solve)(&mut sc, &mut out)?;
    out.flush()
}

fn list<W: Write>(out: &mut W) -> io::Result<()> {
    let mut counts = BTreeMap::<String, usize>::new();

    writeln!(out, "Problems:")?;
    for p in problem::all() {
        writeln!(out, "  {:<6} {}", p.name, p.title)?;
        *counts.entry(p.set()).or_insert(0) += 1;
    }

    writeln!(out, "\nSolutions:")?;
    for (set, count) in &counts {
        writeln!(out, "  {}: {}", set, count)?;
    }
    writeln!(out, "  --------")?;
    writeln!(out, "  Total: {}", counts.values().sum::<usize>())
}

fn print_created<W: Write>(out: &mut W, problem: &Problem, dir: &Path, count: usize) -> io::Result<()> {
    writeln!(out, "Created: {}", dir.display())?;
    for i in 1..count + 1 {
        writeln!(out, "  in{}.txt, ans{}.txt", i, i)?;
    }
    writeln!(out)?;
    writeln!(out, "Problem: {}", problem.url())
}

/// Returns whether the command succeeded.
fn run(config: &Config) -> io::Result<bool> {
    match config.command {
        Command::Solve { ref name } => {
            let problem = lookup(name)?;
            info!("solving {} {}", problem.name, problem.title);
            solve(problem)?;
        }
        Command::List => {
            let stdout = io::stdout();
            list(&mut stdout.lock())?;
        }
        Command::Test { ref name, num } => {
            let problem = lookup(name)?;
            let cases = samples::load(&config.samples_dir, problem, num)?;
            if cases.is_empty() {
                error!("No test cases found. Run: cf eg {}", problem.name);
                return Ok(false);
            }

            println!("Testing: {} {}", problem.name, problem.title);
            let stdout = io::stdout();
            let report = judge::run(problem, &cases, &mut stdout.lock())?;
            return Ok(report.is_ok());
        }
        Command::Eg { ref name, count } => {
            let problem = lookup(name)?;
            let dir = samples::create(&config.samples_dir, problem, count)?;

            let stdout = io::stdout();
            print_created(&mut stdout.lock(), problem, &dir, count)?;
        }
    }
    Ok(true)
}

fn main() {
    env_logger::init();

    let matches = parse_args();
    let config = Config::from_matches(&matches);
    debug!("{:?}", config);

    match run(&config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile;

    fn config(args: &[&str]) -> Config {
        let matches = app().get_matches_from(args.to_vec());
        Config::from_matches(&matches)
    }

    #[test]
    fn test_config() {
        let c = config(&["cf", "solve", "71a"]);
        assert_eq!(
            Command::Solve {
                name: "71a".to_owned()
            },
            c.command
        );
        assert_eq!(PathBuf::from("samples"), c.samples_dir);

        let c = config(&["cf", "test", "231A", "2", "--samples-dir", "/tmp/s"]);
        assert_eq!(
            Command::Test {
                name: "231A".to_owned(),
                num: Some(2),
            },
            c.command
        );
        assert_eq!(PathBuf::from("/tmp/s"), c.samples_dir);

        let c = config(&["cf", "eg", "4A"]);
        assert_eq!(
            Command::Eg {
                name: "4A".to_owned(),
                count: 1,
            },
            c.command
        );

        assert_eq!(Command::List, config(&["cf", "list"]).command);
    }

    #[test]
    fn test_lookup() {
        assert_eq!("1A", lookup("1a").unwrap().name);
        let err = lookup("2b").unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
        assert!(err.to_string().contains("problem 2B."));
        assert!(lookup("leetcode").unwrap_err().to_string().contains("invalid"));
    }

    #[test]
    fn test_list() {
        let mut out = Vec::new();
        list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  71A    Way Too Long Words\n"));
        assert!(text.contains("  A-set: 5\n"));
        assert!(text.ends_with("  Total: 5\n"));
    }

    #[test]
    fn test_print_created() {
        let root = tempfile::tempdir().unwrap();
        let p = lookup("69A").unwrap();
        let dir = samples::create(root.path(), p, 2).unwrap();

        let mut out = Vec::new();
        print_created(&mut out, p, &dir, 2).unwrap();
        assert_eq!(
            format!(
                "Created: {}\n  in1.txt, ans1.txt\n  in2.txt, ans2.txt\n\n\
                 Problem: https://codeforces.com/contest/69/problem/A\n",
                dir.display()
            ),
            String::from_utf8(out).unwrap()
        );
    }
}
