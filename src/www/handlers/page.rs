//! The dashboard page, rendered with every binding already evaluated for the
//! initial state so the first paint needs no callback round-trip.

use crate::dashboard::bindings::{self, Display};
use crate::dashboard::{Dashboard, Mode};
use crate::finals::Finals;
use crate::stats;
use crate::www::{self, handlers::template};
use actix_web::{Responder, web};
use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

pub const PAGE_TITLE: &str = "World Cup Finals Map";

const MODE_OPTIONS: [(Mode, &str); 2] = [
    (Mode::All, "All-time Winners"),
    (Mode::Year, "Specific Year"),
];

#[derive(Serialize)]
struct ModeOption {
    value: Mode,
    label: &'static str,
    checked: bool,
}

#[derive(Serialize)]
struct YearOption {
    value: u16,
    selected: bool,
}

#[derive(Serialize)]
struct DashboardPage {
    title: &'static str,
    dispatch_path: &'static str,
    modes: Vec<ModeOption>,
    years: Vec<YearOption>,
    countries: Vec<String>,
    year_selector_display: Display,
    win_count_text: String,
    state_json: String,
    outputs_json: String,
}

pub async fn index(
    finals: web::Data<Finals>,
    engine: web::Data<Handlebars<'static>>,
) -> impl Responder {
    template::to_response(render_dashboard(&finals, &engine))
}

fn render_dashboard(finals: &Finals, engine: &Handlebars<'_>) -> Result<String> {
    let dashboard = Dashboard::new(finals);
    let state = dashboard.state();

    let modes = MODE_OPTIONS
        .into_iter()
        .map(|(value, label)| ModeOption {
            value,
            label,
            checked: value == state.mode,
        })
        .collect();
    let years = finals
        .years()
        .map(|value| YearOption {
            value,
            selected: value == state.selected_year,
        })
        .collect();

    let page = DashboardPage {
        title: PAGE_TITLE,
        dispatch_path: www::DISPATCH_PATH,
        modes,
        years,
        countries: stats::winner_names(finals),
        year_selector_display: bindings::year_selector(state.mode).display,
        win_count_text: bindings::win_count_text(finals, state.selected_country.as_deref()),
        state_json: template::script_json(state)?,
        outputs_json: template::script_json(&dashboard.render_all())?,
    };
    template::render_page(engine, PAGE_TITLE, "dashboard", &page)
}
