//! Bot-versus-bot simulation runner.
//! Plays seeded all-bot matches and reports wins and average totals per seat.

use anyhow::{bail, Context};
use cacho::{BotPolicy, Match, MatchConfig, MatchResult, SeatConfig};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cacho bot self-play")]
struct Args {
    /// Matches to play.
    #[arg(short, long, default_value = "100")]
    games: u32,

    /// Seed of the first match; match `i` uses `seed + i`.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Comma-separated bot tiers, one seat each.
    #[arg(long, value_delimiter = ',', default_value = "hard,medium")]
    tiers: Vec<BotPolicy>,

    /// JSON match config; overrides `--tiers`. Every seat must be a bot.
    #[arg(long)]
    config: Option<String>,

    /// Log filter, e.g. `info` or `cacho=debug`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SeatReport {
    name: String,
    wins: u32,
    sleeping_wins: u32,
    average_total: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    games: u32,
    seats: Vec<SeatReport>,
}

fn load_config(args: &Args) -> anyhow::Result<MatchConfig> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("could not read config file {path}"))?;
            serde_json::from_str::<MatchConfig>(&text)
                .with_context(|| format!("could not parse config file {path}"))?
        }
        None => MatchConfig {
            seats: args
                .tiers
                .iter()
                .enumerate()
                .map(|(i, &tier)| SeatConfig::bot(format!("Bot {} ({tier})", i + 1), tier))
                .collect(),
            seed: args.seed,
        },
    };

    config.validate()?;
    if let Some(seat) = config.seats.iter().find(|s| !s.is_bot()) {
        bail!("seat {} is not a bot", seat.name);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).context("invalid log level")?)
        .init();

    let config = load_config(&args)?;
    info!(games = args.games, seats = config.player_count(), "starting simulation");

    let mut seats: Vec<SeatReport> = config
        .seats
        .iter()
        .map(|s| SeatReport {
            name: s.name.clone(),
            wins: 0,
            sleeping_wins: 0,
            average_total: 0.0,
        })
        .collect();
    let mut totals = vec![0u64; seats.len()];

    for i in 0..args.games {
        let mut game = Match::new(config.clone().with_seed(args.seed.wrapping_add(u64::from(i))))?;
        game.run_bots()?;

        let result = game
            .result()
            .context("bots stopped before the match ended")?;
        let winner = result.winner().index();
        seats[winner].wins += 1;
        if matches!(result, MatchResult::Sleeping { .. }) {
            seats[winner].sleeping_wins += 1;
        }
        for (id, player) in game.players().iter() {
            totals[id.index()] += u64::from(player.total());
        }
    }

    if args.games > 0 {
        for (seat, total) in seats.iter_mut().zip(&totals) {
            seat.average_total = *total as f64 / f64::from(args.games);
        }
    }

    let report = Report {
        games: args.games,
        seats,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} games", report.games);
        for seat in &report.seats {
            println!(
                "{:<24} wins {:>5} (dormida {:>3})  avg {:>7.2}",
                seat.name, seat.wins, seat.sleeping_wins, seat.average_total
            );
        }
    }
    Ok(())
}
