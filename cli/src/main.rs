//! hillwalk — shortest climbs across an elevation map.
//!
//! Run: cargo run --bin hillwalk -- path/to/input.txt

mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use hillwalk_core::Point;
use hillwalk_map::{HeightMap, route};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "hillwalk")]
#[command(about = "Shortest climbs across an elevation map")]
struct Cli {
    /// Map file; `-` reads standard input
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Run a single query: 1 = start to end, 2 = any lowest cell to end
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Print a JSON report instead of plain numbers
    #[arg(long)]
    json: bool,

    /// Also print the map with the start-to-end route drawn over it
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn runs(&self, part: u8) -> bool {
        self.part.is_none_or(|p| p == part)
    }
}

/// Answers for one map. The outer `Option` is `None` when the query was not
/// requested; the inner one is `None` when the end is unreachable.
#[derive(Serialize, Debug, PartialEq)]
struct Report {
    start: Point,
    end: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    fewest_steps: Option<Option<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fewest_steps_from_lowest: Option<Option<usize>>,
}

impl Report {
    fn new(map: &HeightMap, cli: &Cli) -> Self {
        Self {
            start: map.start(),
            end: map.end(),
            fewest_steps: cli.runs(1).then(|| route::fewest_steps(map)),
            fewest_steps_from_lowest: cli.runs(2).then(|| route::fewest_steps_from_lowest(map)),
        }
    }

    fn lines(&self) -> impl Iterator<Item = String> + '_ {
        [self.fewest_steps, self.fewest_steps_from_lowest]
            .into_iter()
            .flatten()
            .map(|steps| match steps {
                Some(n) => n.to_string(),
                None => "unreachable".to_string(),
            })
    }
}

fn init_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        return Ok(s);
    }
    std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()).into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let text = read_input(&cli.input)?;
    let map = HeightMap::parse(&text)?;
    log::info!(
        "loaded {}x{} map from {}",
        map.width(),
        map.height(),
        cli.input.display()
    );

    let report = Report::new(&map, &cli);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }

    if cli.trace {
        match route::climb_route(&map) {
            Some(r) => println!("{}", render::render_route(&map, &r)),
            None => log::warn!("no route from {} to {}", map.start(), map.end()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hillwalk").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let c = cli(&[]);
        assert_eq!(c.input, PathBuf::from("input.txt"));
        assert_eq!(c.part, None);
        assert!(!c.json && !c.trace);
        assert_eq!(c.verbose, 0);
    }

    #[test]
    fn part_must_be_one_or_two() {
        assert!(Cli::try_parse_from(["hillwalk", "--part", "3"]).is_err());
        assert_eq!(cli(&["--part", "2", "-vv"]).part, Some(2));
        assert_eq!(cli(&["-vv"]).verbose, 2);
    }

    #[test]
    fn report_lines_for_both_parts() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let report = Report::new(&map, &cli(&[]));
        assert_eq!(report.lines().collect::<Vec<_>>(), vec!["31", "29"]);
    }

    #[test]
    fn report_for_single_part_and_unreachable_end() {
        let map = HeightMap::parse("Sbz\nzzE").unwrap();
        let report = Report::new(&map, &cli(&["--part", "1"]));
        assert_eq!(report.fewest_steps_from_lowest, None);
        assert_eq!(report.lines().collect::<Vec<_>>(), vec!["unreachable"]);
    }

    #[test]
    fn json_report() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let report = Report::new(&map, &cli(&["--part", "2"]));
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": { "x": 0, "y": 0 },
                "end": { "x": 5, "y": 2 },
                "fewest_steps_from_lowest": 29,
            })
        );
    }
}
