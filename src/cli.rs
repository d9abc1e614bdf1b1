use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::board::{SortDirection, SortField};

#[derive(Parser, Debug)]
#[command(author, version, about = "Soccer Elo leaderboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Show one page of the leaderboard
    Board {
        /// Case-insensitive filter on team name or league
        #[arg(short, long, default_value = "")]
        search: String,
        /// Column to sort by: name, league or elo
        #[arg(long, default_value = "elo")]
        sort: SortField,
        /// asc or desc (defaults to the column's natural order)
        #[arg(long)]
        order: Option<SortDirection>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show teams grouped by league
    Leagues {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show a team's rating history
    Team { id: i64 },
    /// Register a new team
    AddTeam {
        #[arg(long)]
        name: String,
        #[arg(long)]
        league: String,
    },
    /// Record a match result
    AddMatch {
        #[arg(long)]
        home: Option<i64>,
        #[arg(long)]
        away: Option<i64>,
        #[arg(long)]
        home_score: Option<u32>,
        #[arg(long)]
        away_score: Option<u32>,
        /// Match date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Start the JSON server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions { shell: Shell },
}
