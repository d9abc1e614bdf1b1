use chrono::NaiveDate;
use log::info;

use super::forms::{MatchForm, TeamForm, ValidationError};
use crate::board::sort_by_name;
use crate::domain::{MatchReceipt, Team};
use crate::pagination::PageWindow;
use crate::remote::{ConnectionStatus, Fetched, RatingService};

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    MatchRecorded { receipt: MatchReceipt, live: bool },
    TeamCreated { team: Team, live: bool },
}

impl Outcome {
    pub fn is_live(&self) -> bool {
        match self {
            Outcome::MatchRecorded { live, .. } | Outcome::TeamCreated { live, .. } => *live,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::MatchRecorded { live: true, .. } => "Match submitted and Elo ratings updated".to_string(),
            Outcome::MatchRecorded { live: false, receipt } => {
                format!("Rating service unavailable; match kept locally as #{}", receipt.id)
            }
            Outcome::TeamCreated { live: true, team } => format!("Team {} created successfully", team.name),
            Outcome::TeamCreated { live: false, team } => {
                format!("Rating service unavailable; team {} kept locally", team.name)
            }
        }
    }
}

/// Admin screen state: the team list loaded once, plus the two entry forms
pub struct AdminDesk<S> {
    service: S,
    teams: Vec<Team>,
    connection: ConnectionStatus,
    page_size: usize,
    pub match_form: MatchForm,
    pub team_form: TeamForm,
}

impl<S: RatingService> AdminDesk<S> {
    pub async fn load(service: S, page_size: usize, today: NaiveDate) -> Self {
        let mut desk = Self {
            service,
            teams: Vec::new(),
            connection: ConnectionStatus::Disconnected,
            page_size: page_size.max(1),
            match_form: MatchForm::blank(today),
            team_form: TeamForm::default(),
        };
        desk.refresh().await;
        desk
    }

    /// Re-fetch the team list from the service
    pub async fn refresh(&mut self) {
        self.apply_teams(self.service.get_teams().await);
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.connection
    }

    pub fn team_page(&self, page: usize) -> (PageWindow, &[Team]) {
        let window = PageWindow::new(page, self.page_size, self.teams.len());
        (window, window.slice(&self.teams))
    }

    /// Validate and send the match form.
    ///
    /// Invalid forms are rejected without contacting the service. On success
    /// the form is cleared; a live submission also reloads the team list so
    /// the new ratings show up.
    pub async fn submit_match(&mut self, today: NaiveDate) -> Result<Outcome, ValidationError> {
        let payload = self.match_form.validate()?;

        let fetched = self.service.create_match(&payload).await;
        let live = fetched.is_live();
        self.match_form = MatchForm::blank(today);

        if live {
            self.refresh().await;
        }

        Ok(Outcome::MatchRecorded {
            receipt: fetched.into_inner(),
            live,
        })
    }

    /// Validate and send the team form, then merge the new team into the
    /// local list without a full reload.
    pub async fn submit_team(&mut self) -> Result<Outcome, ValidationError> {
        let new_team = self.team_form.validate()?;

        let fetched = self.service.create_team(&new_team).await;
        let live = fetched.is_live();
        let team = fetched.into_inner();

        self.teams.push(team.clone());
        sort_by_name(&mut self.teams);
        self.team_form = TeamForm::default();
        info!("Team list now holds {} teams", self.teams.len());

        Ok(Outcome::TeamCreated { team, live })
    }

    fn apply_teams(&mut self, fetched: Fetched<Vec<Team>>) {
        self.connection = fetched.connection();
        self.teams = fetched.into_inner();
        sort_by_name(&mut self.teams);
    }
}
