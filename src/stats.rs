//! Derived views over the finals table: all-time winners, per-year finalists
//! and per-country win counts. Everything here is recomputed on each call.

use crate::finals::{Country, Finals, LookupError};
use itertools::Itertools;
use serde::Serialize;

/// The label every all-time winner is tagged with on the map.
pub const PAST_WINNER: &str = "Past Winner";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PastWinner {
    pub code: String,
    pub name: String,
    pub result: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finalists {
    pub year: u16,
    pub winner: Country,
    pub runner_up: Country,
}

/// Distinct winners across all years, in order of their first title.
pub fn all_time_winners(finals: &Finals) -> Vec<PastWinner> {
    finals
        .records()
        .iter()
        .map(|r| &r.winner)
        .unique_by(|c| c.code.clone())
        .map(|c| PastWinner {
            code: c.code.clone(),
            name: c.name.clone(),
            result: PAST_WINNER,
        })
        .collect()
}

pub fn finalists_for_year(finals: &Finals, year: u16) -> Result<Finalists, LookupError> {
    let record = finals.get(year)?;
    Ok(Finalists {
        year,
        winner: record.winner.clone(),
        runner_up: record.runner_up.clone(),
    })
}

/// Number of finals won by the country with this full name. Unknown names win nothing.
pub fn win_count(finals: &Finals, country: &str) -> usize {
    finals
        .records()
        .iter()
        .filter(|r| r.winner.name == country)
        .count()
}

/// Sorted distinct winner names. Countries that never won do not appear.
pub fn winner_names(finals: &Finals) -> Vec<String> {
    finals
        .records()
        .iter()
        .map(|r| r.winner.name.as_str())
        .sorted()
        .dedup()
        .map(str::to_string)
        .collect()
}
