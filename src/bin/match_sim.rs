//! Match simulation CLI
//!
//! Generates two random rosters and plays one match.

use anyhow::{Context, Result};
use clap::Parser;
use match_sim::report::{final_summary, minute_line, strength_lines};
use match_sim::{Formation, Match, MatchConfig, MatchReport, RosterGenerator};

#[derive(Parser)]
#[command(name = "match-sim")]
#[command(about = "Simulate a football match minute by minute", long_about = None)]
struct Cli {
    /// Home team name
    #[arg(long, default_value = "Team A")]
    home: String,

    /// Away team name
    #[arg(long, default_value = "Team B")]
    away: String,

    /// Home formation (defenders-midfielders-strikers)
    #[arg(long, default_value = "4-5-1")]
    home_formation: String,

    /// Away formation (defenders-midfielders-strikers)
    #[arg(long, default_value = "4-4-2")]
    away_formation: String,

    /// Minutes to simulate
    #[arg(long, default_value = "45")]
    minutes: u32,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between minutes, in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Print minute-by-minute commentary
    #[arg(long)]
    commentary: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let home_formation: Formation = cli.home_formation.parse()?;
    let away_formation: Formation = cli.away_formation.parse()?;

    let config = MatchConfig::default()
        .with_minutes(cli.minutes)
        .with_seed(cli.seed.unwrap_or_else(rand::random))
        .with_step_delay_ms(cli.delay_ms);
    log::info!("seed {}", config.seed);

    let mut generator = RosterGenerator::for_seed(config.seed);
    let home = generator.generate_team(cli.home, home_formation);
    let away = generator.generate_team(cli.away, away_formation);

    let game = Match::new(home, away, config)?;
    let names = game.fixture().names();

    if !cli.json {
        println!("{}", strength_lines(&names, &game.strength_summary()));
    }

    let commentary = cli.commentary && !cli.json;
    let report = game.play_with(|record| {
        if commentary {
            println!("{}", minute_line(&names, record));
        }
    });

    if cli.json {
        println!("{}", report_json(&report)?);
    } else {
        print!("{}", final_summary(&report));
    }
    Ok(())
}

fn report_json(report: &MatchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report")
}
