use crate::finals::Finals;
use serde::{Deserialize, Serialize};

/// Which map the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    All,
    Year,
}

/// Everything the controls currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub mode: Mode,
    pub selected_year: u16,
    #[serde(default)]
    pub selected_country: Option<String>,
}

impl UiState {
    /// All-time mode, earliest year, no country.
    pub fn initial(finals: &Finals) -> Self {
        Self {
            mode: Mode::All,
            selected_year: finals.earliest_year().unwrap_or_default(),
            selected_country: None,
        }
    }
}

/// A change to one control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "lowercase")]
pub enum UiEvent {
    Mode(Mode),
    Year(u16),
    Country(Option<String>),
}

/// The three outputs the page keeps in sync with the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    YearSelector,
    WinCount,
    Map,
}

impl Binding {
    pub const ALL: [Binding; 3] = [Binding::YearSelector, Binding::WinCount, Binding::Map];
}

impl UiEvent {
    /// The bindings whose inputs this event changes.
    pub fn triggers(&self) -> &'static [Binding] {
        match self {
            UiEvent::Mode(_) => &[Binding::YearSelector, Binding::Map],
            UiEvent::Year(_) => &[Binding::Map],
            UiEvent::Country(_) => &[Binding::WinCount],
        }
    }

    pub(crate) fn apply(self, state: &mut UiState) {
        match self {
            UiEvent::Mode(mode) => state.mode = mode,
            UiEvent::Year(year) => state.selected_year = year,
            UiEvent::Country(name) => state.selected_country = name.filter(|n| !n.is_empty()),
        }
    }
}
