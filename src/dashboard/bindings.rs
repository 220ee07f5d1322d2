//! The three reactive bindings. Each is a pure function of its own inputs.

use super::state::Mode;
use crate::figure::{ChoroplethTrace, Figure};
use crate::finals::Finals;
use crate::stats::{self, PAST_WINNER};
use serde::Serialize;

pub const WINNER: &str = "Winner";
pub const RUNNER_UP: &str = "Runner Up";
const PAST_WINNER_COLOR: &str = "green";
const WINNER_COLOR: &str = "gold";
const RUNNER_UP_COLOR: &str = "blue";

/// CSS display state of the year dropdown's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub display: Display,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    #[serde(rename = "none")]
    Hidden,
}

impl Visibility {
    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }
}

pub fn year_selector(mode: Mode) -> Visibility {
    let display = match mode {
        Mode::Year => Display::Block,
        Mode::All => Display::Hidden,
    };
    Visibility { display }
}

pub fn win_count_text(finals: &Finals, country: Option<&str>) -> String {
    let Some(country) = country.filter(|c| !c.is_empty()) else {
        return String::new();
    };
    let n = stats::win_count(finals, country);
    let plural = if n == 1 { "" } else { "s" };
    format!("{country} has won the World Cup {n} time{plural}.")
}

pub fn map_figure(finals: &Finals, mode: Mode, year: u16) -> Figure {
    match mode {
        Mode::All => all_time_map(finals),
        Mode::Year => year_map(finals, year),
    }
}

fn all_time_map(finals: &Finals) -> Figure {
    let winners = stats::all_time_winners(finals);
    let trace = ChoroplethTrace::category(
        PAST_WINNER,
        PAST_WINNER_COLOR,
        winners.into_iter().map(|w| (w.code, w.name)),
    );
    Figure::choropleth("All-Time World Cup Winners", vec![trace])
}

fn year_map(finals: &Finals, year: u16) -> Figure {
    match stats::finalists_for_year(finals, year) {
        Ok(f) => Figure::choropleth(
            format!("World Cup Finalists - {year}"),
            vec![
                ChoroplethTrace::category(WINNER, WINNER_COLOR, [(f.winner.code, f.winner.name)]),
                ChoroplethTrace::category(
                    RUNNER_UP,
                    RUNNER_UP_COLOR,
                    [(f.runner_up.code, f.runner_up.name)],
                ),
            ],
        ),
        Err(e) => {
            log::warn!("rendering placeholder map: {e}");
            Figure::placeholder(format!("No data for {year}"))
        }
    }
}
