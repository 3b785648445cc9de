use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::{
    domain::{AlgorithmKind, Stats, DEFAULT_SPEED_MS},
    error::{parse_values, VisualizerError},
    protocol::{DriverCommand, DriverEvent, RunOutcome},
};
use step_driver::{reference, spawn_driver, ArrayGenerator, ArraySpec, Driver};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "thinkpixel-headless", about = "Run visualizer drivers without a window")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List algorithm slugs.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Run one algorithm to completion and check it against the reference.
    Run {
        #[arg(long)]
        algorithm: String,
        /// Comma separated input values.
        #[arg(long, conflicts_with = "random")]
        values: Option<String>,
        /// Generate this many random values instead.
        #[arg(long)]
        random: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i64>,
        #[arg(long)]
        json: bool,
        /// Drive the run through the timed loop and print every unit.
        #[arg(long)]
        trace: bool,
        #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
        speed_ms: u64,
    },
}

#[derive(Debug, Serialize)]
struct AlgorithmEntry {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct RunReport {
    algorithm: AlgorithmKind,
    input: Vec<i64>,
    output: Vec<i64>,
    stats: Stats,
    units: u64,
    outcome: RunOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    verified: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => list(json)?,
        Command::Run {
            algorithm,
            values,
            random,
            seed,
            target,
            json,
            trace,
            speed_ms,
        } => {
            let kind = AlgorithmKind::from_slug(&algorithm)
                .ok_or_else(|| VisualizerError::UnknownAlgorithm(algorithm.clone()))?;
            let input = input_values(values.as_deref(), random, seed)?;
            let report = if trace {
                run_traced(kind, &input, target, speed_ms).await?
            } else {
                run_direct(kind, &input, target)?
            };
            print_report(&report, json)?;
            if !report.verified {
                bail!("{kind} diverged from the reference implementation");
            }
        }
    }

    Ok(())
}

fn list(json: bool) -> Result<()> {
    let entries: Vec<AlgorithmEntry> = AlgorithmKind::ALL
        .into_iter()
        .map(|kind| AlgorithmEntry {
            slug: kind.slug(),
            name: kind.label(),
            description: kind.description(),
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{:<16} {}", entry.slug, entry.description);
        }
    }
    Ok(())
}

fn input_values(values: Option<&str>, random: Option<usize>, seed: Option<u64>) -> Result<Vec<i64>> {
    if let Some(values) = values {
        return Ok(parse_values(values)?);
    }
    let spec = ArraySpec {
        len: random.unwrap_or(ArraySpec::default().len),
        ..ArraySpec::default()
    };
    let mut generator = ArrayGenerator::new(spec, seed).context("invalid --random length")?;
    Ok(generator.next_values())
}

fn run_direct(kind: AlgorithmKind, input: &[i64], target: Option<i64>) -> Result<RunReport> {
    let mut driver = Driver::new(kind, input, DEFAULT_SPEED_MS);
    driver.set_target(target);
    let outcome = driver.run_to_completion()?;
    verify(kind, input, target, &driver, outcome)
}

async fn run_traced(
    kind: AlgorithmKind,
    input: &[i64],
    target: Option<i64>,
    speed_ms: u64,
) -> Result<RunReport> {
    let (handle, mut events) = spawn_driver(Driver::new(kind, input, speed_ms));
    handle
        .send(DriverCommand::SetTarget { target })
        .await
        .context("driver stopped before start")?;
    handle
        .send(DriverCommand::Start)
        .await
        .context("driver stopped before start")?;

    let outcome = loop {
        let event = events
            .recv()
            .await
            .context("driver stopped before finishing")?;
        match event {
            DriverEvent::Snapshot(snapshot) => {
                if let Some(step) = snapshot.last_step {
                    let line = snapshot
                        .highlight_line
                        .map(|line| format!(" (line {line})"))
                        .unwrap_or_default();
                    eprintln!("{:>5} {:?}{line} {:?}", snapshot.units, step, snapshot.values());
                }
            }
            DriverEvent::Finished { outcome, .. } => break outcome,
            DriverEvent::Rejected(err) => return Err(err.into()),
        }
    };

    let driver = handle
        .shutdown()
        .await
        .context("driver task panicked")?;
    verify(kind, input, target, &driver, outcome)
}

fn verify(
    kind: AlgorithmKind,
    input: &[i64],
    target: Option<i64>,
    driver: &Driver,
    outcome: RunOutcome,
) -> Result<RunReport> {
    let expected = reference::run(kind, input, target)?;
    let output = driver.bars().values();
    let search_matches = match &outcome {
        RunOutcome::Sorted { .. } => expected.search.is_none(),
        RunOutcome::Search(found) => expected.search.as_ref() == Some(found),
    };
    let verified = output == expected.values && driver.stats() == expected.stats && search_matches;
    if !verified {
        tracing::warn!(
            %kind,
            ?output,
            expected = ?expected.values,
            stats = ?driver.stats(),
            expected_stats = ?expected.stats,
            "driver and reference disagree"
        );
    }

    Ok(RunReport {
        algorithm: kind,
        input: input.to_vec(),
        output,
        stats: driver.stats(),
        units: driver.units(),
        message: outcome.message(),
        outcome,
        verified,
    })
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("{}", report.algorithm.label());
    println!("  input:  {:?}", report.input);
    println!("  output: {:?}", report.output);
    for column in report.algorithm.stat_columns() {
        println!("  {:<12} {}", column.label(), report.stats.get(*column));
    }
    println!("  {:<12} {}", "Steps", report.units);
    if let Some(message) = &report.message {
        println!("  {message}");
    }
    println!("  verified:   {}", report.verified);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_example_verifies() {
        let report = run_direct(AlgorithmKind::BubbleSort, &[5, 3, 8, 1], None).expect("run");
        assert!(report.verified);
        assert_eq!(report.output, vec![1, 3, 5, 8]);
        assert_eq!(report.stats.comparisons, 6);
    }

    #[test]
    fn search_report_carries_message() {
        let report =
            run_direct(AlgorithmKind::BinarySearch, &[30, 10, 50, 20, 40], Some(40)).expect("run");
        assert!(report.verified);
        assert_eq!(report.message.as_deref(), Some("Target 40 Found!"));
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["outcome"]["payload"]["index"], 3);
    }

    #[test]
    fn search_without_target_fails() {
        let err = run_direct(AlgorithmKind::BinarySearch, &[1, 2], None).expect_err("no target");
        assert!(err.to_string().contains("enter a search target"));
    }

    #[test]
    fn seeded_random_input_is_reproducible() {
        let a = input_values(None, Some(10), Some(3)).expect("values");
        let b = input_values(None, Some(10), Some(3)).expect("values");
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn traced_run_matches_direct_run() {
        let traced = run_traced(AlgorithmKind::QuickSort, &[4, 1, 3, 2], None, 50)
            .await
            .expect("traced");
        let direct = run_direct(AlgorithmKind::QuickSort, &[4, 1, 3, 2], None).expect("direct");
        assert!(traced.verified);
        assert_eq!(traced.stats, direct.stats);
        assert_eq!(traced.units, direct.units);
    }

    #[test]
    fn cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "thinkpixel-headless",
            "run",
            "--algorithm",
            "binary-search",
            "--values",
            "1,2,3",
            "--target",
            "-2",
        ])
        .expect("cli");
        let Command::Run { target, values, .. } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(target, Some(-2));
        assert_eq!(values.as_deref(), Some("1,2,3"));
    }
}
