//! # Dashboard Controls and Reactive Wiring
//!
//! The dashboard holds the UI state and routes each control change to the
//! bindings that depend on it. Bindings never read each other's results;
//! every fired binding is recomputed from the state in full.
//!
//! ## Submodules
//! - `state`: UI state, control events and the event → binding routing.
//! - `bindings`: the pure functions producing each output.

pub mod bindings;
pub mod state;

use crate::figure::Figure;
use crate::finals::Finals;
use bindings::Visibility;
use serde::Serialize;
pub use state::{Binding, Mode, UiEvent, UiState};

/// A computed value for one region of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "target", content = "value", rename_all = "kebab-case")]
pub enum Output {
    YearSelector(Visibility),
    WinCount(String),
    Map(Figure),
}

/// The view layer: a state value plus the dataset it renders.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    finals: &'a Finals,
    state: UiState,
}

impl<'a> Dashboard<'a> {
    pub fn new(finals: &'a Finals) -> Self {
        Self::with_state(finals, UiState::initial(finals))
    }

    pub fn with_state(finals: &'a Finals, state: UiState) -> Self {
        Self { finals, state }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn into_state(self) -> UiState {
        self.state
    }

    /// Applies one control change and returns the outputs it invalidates.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Output> {
        log::debug!("dispatch {event:?}");
        let fired = event.triggers();
        event.apply(&mut self.state);
        fired.iter().map(|&b| self.evaluate(b)).collect()
    }

    /// Every output for the current state, as on first page load.
    pub fn render_all(&self) -> Vec<Output> {
        Binding::ALL.iter().map(|&b| self.evaluate(b)).collect()
    }

    pub fn evaluate(&self, binding: Binding) -> Output {
        let s = &self.state;
        match binding {
            Binding::YearSelector => Output::YearSelector(bindings::year_selector(s.mode)),
            Binding::WinCount => {
                let country = s.selected_country.as_deref();
                Output::WinCount(bindings::win_count_text(self.finals, country))
            }
            Binding::Map => {
                let figure = bindings::map_figure(self.finals, s.mode, s.selected_year);
                Output::Map(figure)
            }
        }
    }
}
