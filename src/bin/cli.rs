use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use podium_engine::{
    InferenceOptions, InferenceRequest, Leaderboard, LeaderboardData, LeaderboardMode, Player,
    RankEngine, ScoringConfig, Submission,
};

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Podium leaderboard engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the top three from OCR text
    Rank {
        /// Roster JSON file ([{"id": 1, "name": "Sam Lee"}, ...])
        #[arg(short, long)]
        roster: PathBuf,

        /// OCR text file (reads stdin when omitted)
        #[arg(short, long)]
        text: Option<PathBuf>,

        /// Player id of whoever uploaded the screenshot
        #[arg(short, long)]
        uploader: Option<String>,

        /// Podium slots to fill
        #[arg(short, long, default_value = "3")]
        max_ranks: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Turn a submission into scored placement rows
    Placements {
        /// Submission JSON file
        #[arg(short, long)]
        submission: PathBuf,

        #[arg(long, default_value = "3")]
        rank1_points: u32,

        #[arg(long, default_value = "2")]
        rank2_points: u32,

        #[arg(long, default_value = "1")]
        rank3_points: u32,

        #[arg(long, default_value = "1")]
        flawless_bonus: u32,
    },

    /// Show standings
    Leaderboard {
        /// Leaderboard snapshot JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// overall, analytical, language or daily
        #[arg(short, long, default_value = "overall")]
        mode: LeaderboardMode,

        /// Show a single game instead of a mode
        #[arg(short, long)]
        game: Option<String>,

        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show highlight cards
    Highlights {
        /// Leaderboard snapshot JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podium_engine=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { roster, text, uploader, max_ranks, json } => {
            let roster: Vec<Player> = read_json(&roster)?;

            let text = match text {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let engine = RankEngine::new(InferenceOptions { max_ranks });
            let result = engine.infer(&InferenceRequest {
                roster,
                text: Some(text),
                uploader_id: uploader.map(Into::into),
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_empty() {
                println!("🤷 No players recognized");
            } else {
                println!("🏆 Inferred podium:");
                for (i, player) in result.players.iter().enumerate() {
                    println!("   {}. {} ({})", i + 1, player.name, player.id);
                }
            }
        }

        Commands::Placements {
            submission,
            rank1_points,
            rank2_points,
            rank3_points,
            flawless_bonus,
        } => {
            let submission: Submission = read_json(&submission)?;
            let scoring = ScoringConfig {
                rank_points: [rank1_points, rank2_points, rank3_points],
                flawless_bonus,
            };

            let rows = submission.placements(&scoring);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }

        Commands::Leaderboard { data, mode, game, today } => {
            let board = Leaderboard::new(LeaderboardData::from_json_file(&data)?);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());

            let rows = match &game {
                Some(game_id) => {
                    println!("🎮 {}", game_id);
                    board.game_standings(game_id)?
                }
                None => {
                    println!("📊 {}", mode.description());
                    board.standings(mode, today)
                }
            };

            if rows.is_empty() {
                println!("   No results yet for this view.");
            }
            for (i, row) in rows.iter().enumerate() {
                println!("   {:>2}. {:<20} {:>4}", i + 1, row.player.name, row.points);
            }
        }

        Commands::Highlights { data, today } => {
            let board = Leaderboard::new(LeaderboardData::from_json_file(&data)?);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());

            let cards = board.highlights(today);
            if cards.is_empty() {
                println!(
                    "No highlights yet. Play some games and submit results to unlock the banter."
                );
            }
            for card in cards {
                println!("{}\n   {}", card.title(), card.text());
            }
        }
    }

    Ok(())
}
