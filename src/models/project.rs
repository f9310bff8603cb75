use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
    pub manager: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub spent: Decimal,
    pub progress: i32,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project row joined with its materialized team member names.
/// `team` holds the distinct display names from project_team; join order
/// is not guaranteed stable.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ProjectWithTeam {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub team: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub manager: String,
    /// Team member display names. Unknown names are silently dropped,
    /// duplicates collapse to one membership.
    #[serde(default)]
    pub team: Option<Vec<String>>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub spent: Option<Decimal>,
    #[serde(default)]
    pub progress: Option<i32>,
}

/// Full-row replacement. Every column is mandatory except `team`:
/// omitting `team` leaves membership untouched, an empty list clears it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub name: String,
    pub description: String,
    pub status: String,
    pub manager: String,
    #[serde(default)]
    pub team: Option<Vec<String>>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub spent: Decimal,
    pub progress: i32,
}
