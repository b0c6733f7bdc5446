#[macro_use]
extern crate clap;

mod math;

use std::{fs, io, path::Path};

use anyhow::Context;
use clap::{App, Arg};
use reagent::{
    assert, config, run,
    suite::{self, Shared, Suite},
    ux::out::{self, Outputtable},
};

/// Exit code used when the run could not be carried out at all.
const EXIT_ERROR: i32 = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(app().get_matches()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_ERROR)
        }
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("math_tests")
        .author(crate_authors!())
        .version(crate_version!())
        .about("Runs the math example suites")
        .arg(
            Arg::with_name(config::clap::arg::HALT)
                .help("Halting strategy to use between suites")
                .long("halt")
                .value_name("STRATEGY")
                .possible_values(config::halt::string::ALL),
        )
        .arg(
            Arg::with_name(config::clap::arg::JOBS)
                .help("Maximum number of suites to run at once")
                .short("j")
                .long("jobs")
                .value_name("NUM"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .help("How to report results")
                .short("o")
                .long("output")
                .value_name("FORMAT")
                .possible_values(out::choice::string::ALL),
        )
        .arg(
            Arg::with_name(CONFIG)
                .help("TOML config file to start from")
                .short("c")
                .long("config")
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name(DUMP_CONFIG)
                .help("Dump config instead of testing")
                .long("dump-config"),
        )
}

const OUTPUT: &str = "output";
const CONFIG: &str = "config";
const DUMP_CONFIG: &str = "dump-config";

fn run(matches: clap::ArgMatches) -> anyhow::Result<i32> {
    use config::clap::Clappable;

    let base = match matches.value_of(CONFIG) {
        Some(path) => load_config(Path::new(path))?,
        None => config::Config::default(),
    };
    let config = base.parse_clap(&matches)?;
    if matches.is_present(DUMP_CONFIG) {
        println!("{}", config.to_string()?);
        return Ok(0);
    }

    let choice = matches
        .value_of(OUTPUT)
        .map_or(Ok(out::Choice::default()), str::parse)?;
    run_suites(&config, choice)
}

fn load_config(path: &Path) -> anyhow::Result<config::Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("couldn't read config file {}", path.display()))?;
    Ok(config::Config::from_str(&text)?)
}

fn run_suites(config: &config::Config, choice: out::Choice) -> anyhow::Result<i32> {
    let mut runner = run::Runner::from_config(config);
    ctrlc::set_handler(runner.on_callback())?;

    let report = runner.run(suites()?)?;
    report.output(choice, io::stdout())?;
    Ok(report.exit_code())
}

fn suites() -> suite::Result<Vec<Suite<'static, Shared>>> {
    use math::{count_primes, factorial};

    Ok(vec![
        Suite::shared("Factorial")?
            .case(|| assert::greater_than(factorial(0), 0).labelled("0! > 0"))
            .case(|| assert::equals(factorial(1), 1).labelled("1! = 1"))
            .case(|| assert::equals(factorial(5), 120).labelled("5! = 120")),
        Suite::shared("Prime Counting")?
            .describe("Counting how many prime numbers are in ranges.")
            .case(|| assert::less_than_or_equals(count_primes(10000), 1229)),
    ])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_example_suites_pass() -> anyhow::Result<()> {
        let report = run::Runner::default().run(suites()?)?;
        assert_eq!(report.suites.len(), 2);
        assert_eq!(report.suites[0].passed_count(), 3);
        assert_eq!(report.suites[1].total(), 1);
        assert_eq!(report.exit_code(), 0);
        Ok(())
    }
}
