mod desk;
mod forms;

pub use desk::{AdminDesk, Outcome};
pub use forms::{MatchForm, TeamForm, ValidationError};
