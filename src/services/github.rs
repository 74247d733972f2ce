//! GitHub GraphQL data source
//!
//! One query per call, one fully-buffered response. No retries, no
//! pagination. The credential is attached at construction; tests
//! substitute a fake `CalendarSource` instead of hitting the network.

use crate::types::{CalendarGrid, ContributionDay, GhcalError, Result, Week};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// GitHub GraphQL v4 endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com/graphql";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Contribution calendar query: per-day date and count, week-structured
const CALENDAR_QUERY: &str = "\
query ($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}";

/// Capability that yields a week-structured contribution calendar for a
/// username over an inclusive instant range
pub trait CalendarSource {
    fn query(
        &self,
        username: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<CalendarGrid>;
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    username: &'a str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(default)]
    user: Option<UserData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserData {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
struct ContributionCalendar {
    weeks: Vec<RawWeek>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeek {
    contribution_days: Vec<RawDay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDay {
    date: NaiveDate,
    contribution_count: u32,
}

/// GitHub-backed calendar source with an optional bearer credential.
/// Without a credential the call is expected to fail authentication and
/// surface as `NoData`.
pub struct GitHubClient {
    token: Option<String>,
    endpoint: String,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            endpoint: GITHUB_API_URL.to_string(),
        }
    }

    /// Override the endpoint (for tests against a local server)
    #[allow(dead_code)]
    pub fn with_endpoint(token: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            token,
            endpoint: endpoint.into(),
        }
    }
}

impl CalendarSource for GitHubClient {
    fn query(
        &self,
        username: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<CalendarGrid> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("ghcal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GhcalError::Transport(format!("HTTP client error: {}", e)))?;

        let body = GraphqlRequest {
            query: CALENDAR_QUERY,
            variables: Variables { username, from, to },
        };

        let mut request = client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let text = request
            .send()
            .and_then(|response| response.text())
            .map_err(|e| GhcalError::Transport(e.to_string()))?;

        parse_response(&text)
    }
}

/// Decode a GraphQL response body into a weekday-aligned calendar grid.
///
/// A missing or null `data.user` wins over a populated `errors` list;
/// GraphQL errors only surface alongside a present user object.
pub fn parse_response(body: &str) -> Result<CalendarGrid> {
    let response: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| GhcalError::Transport(e.to_string()))?;

    let user = match response.data.and_then(|data| data.user) {
        Some(user) => user,
        None => return Err(GhcalError::NoData),
    };

    if let Some(mut errors) = response.errors {
        if !errors.is_empty() {
            return Err(GhcalError::Api(errors.remove(0).message));
        }
    }

    let weeks = user.contributions_collection.contribution_calendar.weeks;
    Ok(weeks.into_iter().map(align_week).collect())
}

/// Place raw day entries into weekday slots (Sunday = 0). Days outside
/// the fetched range are absent in the response and leave their slots
/// empty, so the first week may begin with empty leading slots.
fn align_week(raw: RawWeek) -> Week {
    let mut week = Week::default();
    for day in raw.contribution_days {
        week.place(ContributionDay {
            date: day.date,
            count: day.contribution_count,
        });
    }
    week
}
