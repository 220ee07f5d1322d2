// # wcfinals: World Cup Finals Map
//
// A single-page dashboard that draws every FIFA World Cup final on a world
// map. The dataset and its derivations are plain functions over an immutable
// table; the `dashboard` module wires them to the page's controls and the
// `www` module serves the page with actix-web.

/// The fixed table of finals and country names.
pub mod finals;

/// Derived views: all-time winners, per-year finalists, win counts.
pub mod stats;

/// Serializable Plotly choropleth figures.
pub mod figure;

/// UI state, control events and the reactive bindings.
pub mod dashboard;

/// Server settings from the environment.
pub mod config;

/// WWW server implementation.
pub mod www;
