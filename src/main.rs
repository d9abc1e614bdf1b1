use anyhow::Result;

use elo_board::cli::Command;
use elo_board::{
    BoardRequest, MatchRequest, handle_add_match, handle_add_team, handle_board,
    handle_completions, handle_leagues, handle_serve, handle_team, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Board {
            search,
            sort,
            order,
            page,
            page_size,
        } => handle_board(BoardRequest {
            search,
            sort: *sort,
            order: *order,
            page: *page,
            page_size: *page_size,
        }),
        Command::Leagues { search } => handle_leagues(search),
        Command::Team { id } => handle_team(*id),
        Command::AddTeam { name, league } => handle_add_team(name, league),
        Command::AddMatch {
            home,
            away,
            home_score,
            away_score,
            date,
        } => handle_add_match(MatchRequest {
            home: *home,
            away: *away,
            home_score: *home_score,
            away_score: *away_score,
            date: *date,
        }),
        Command::Serve { port } => handle_serve(*port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
