pub mod admin;
pub mod api;
pub mod board;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod remote;
pub mod services;
pub mod views;

use anyhow::{Result, bail};
use chrono::{NaiveDate, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::admin::{AdminDesk, MatchForm, TeamForm, ValidationError};
use crate::board::{BoardState, SortDirection, SortField, TeamDetail};
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::remote::{RatingClient, RatingService};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub struct BoardRequest<'a> {
    pub search: &'a str,
    pub sort: SortField,
    pub order: Option<SortDirection>,
    pub page: usize,
    pub page_size: Option<usize>,
}

pub struct MatchRequest {
    pub home: Option<i64>,
    pub away: Option<i64>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub date: Option<NaiveDate>,
}

fn rating_client(config: &AppConfig) -> Result<RatingClient> {
    RatingClient::new(&config.remote)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn reject(error: ValidationError) -> Result<()> {
    eprintln!("{}", views::render_validation(&error));
    bail!("submission rejected")
}

pub fn handle_board(request: BoardRequest<'_>) -> Result<()> {
    let config = AppConfig::from_env();
    let client = rating_client(&config)?;
    let state = BoardState::new(request.page_size.unwrap_or(config.board.page_size).max(1))
        .with_search(request.search)
        .with_sort(
            request.sort,
            request.order.unwrap_or_else(|| request.sort.natural_direction()),
        )
        .with_page(request.page);

    let runtime = tokio::runtime::Runtime::new()?;
    let fetched = runtime.block_on(client.get_teams());

    let page = board::leaderboard(fetched.data(), &state, config.board.highlight_top);
    println!("{}", views::connection_banner(fetched.connection()));
    print!("{}", views::render_leaderboard(&page, &state));
    Ok(())
}

pub fn handle_leagues(search: &str) -> Result<()> {
    let config = AppConfig::from_env();
    let client = rating_client(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let fetched = runtime.block_on(client.get_teams());
    let teams = fetched.data();

    println!("{}", views::connection_banner(fetched.connection()));
    print!("{}", views::render_league_leaders(&board::league_leaders(teams)));
    println!();
    print!("{}", views::render_leagues(&board::league_view(teams, search)));
    Ok(())
}

pub fn handle_team(id: i64) -> Result<()> {
    let config = AppConfig::from_env();
    let client = rating_client(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let (teams, ratings) =
        runtime.block_on(async { tokio::join!(client.get_teams(), client.get_elo_ratings()) });

    let Some(detail) = TeamDetail::build(teams.data(), ratings.data(), id) else {
        bail!("Team {} not found", id);
    };

    println!(
        "{}",
        views::connection_banner(teams.connection().combine(ratings.connection()))
    );
    print!("{}", views::render_team_detail(&detail));
    Ok(())
}

pub fn handle_add_team(name: &str, league: &str) -> Result<()> {
    let config = AppConfig::from_env();
    let client = rating_client(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(add_team(
        client,
        config.board.admin_page_size,
        TeamForm::new(name, league),
        today(),
    ))
}

pub fn handle_add_match(request: MatchRequest) -> Result<()> {
    let config = AppConfig::from_env();
    let client = rating_client(&config)?;
    let today = today();

    let form = MatchForm {
        home_team_id: request.home,
        away_team_id: request.away,
        home_score: request.home_score,
        away_score: request.away_score,
        date: request.date.unwrap_or(today),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(add_match(client, config.board.admin_page_size, form, today))
}

/// Forms are checked before the desk loads, so a rejected submission never
/// touches the service.
async fn add_team<S: RatingService>(
    service: S,
    page_size: usize,
    form: TeamForm,
    today: NaiveDate,
) -> Result<()> {
    if let Err(e) = form.validate() {
        return reject(e);
    }

    let mut desk = AdminDesk::load(service, page_size, today).await;
    desk.team_form = form;

    let outcome = match desk.submit_team().await {
        Ok(outcome) => outcome,
        Err(e) => return reject(e),
    };

    println!("{}", views::connection_banner(desk.connection()));
    println!("{}", views::render_outcome(&outcome));
    let (window, teams) = desk.team_page(1);
    print!("{}", views::render_admin_teams(&window, teams));
    Ok(())
}

async fn add_match<S: RatingService>(
    service: S,
    page_size: usize,
    form: MatchForm,
    today: NaiveDate,
) -> Result<()> {
    if let Err(e) = form.validate() {
        return reject(e);
    }

    let mut desk = AdminDesk::load(service, page_size, today).await;
    desk.match_form = form;

    let outcome = match desk.submit_match(today).await {
        Ok(outcome) => outcome,
        Err(e) => return reject(e),
    };

    println!("{}", views::connection_banner(desk.connection()));
    println!("{}", views::render_outcome(&outcome));
    Ok(())
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
