//! # HTML Templating and Response Helpers
//!
//! Page layouts are handlebars templates registered once at startup. The
//! engine is shared with the handlers as `web::Data<Handlebars>`; the helpers
//! below turn rendered pages and errors into `HttpResponse`s.

use actix_web::{HttpResponse, Responder};
use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

const MAIN_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1.0,user-scalable=yes">
<title>{{title}}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
body { background: white; color: black; margin: 0; font-family: Arial, sans-serif; }
main { padding: 20px; }
h1 { text-align: center; font-weight: bold; font-family: "Arial Black", Arial, sans-serif; }
label { font-weight: bold; display: block; margin-bottom: 6px; }
.radio-option { display: inline-block; margin-right: 20px; }
select { width: 45%; padding: 6px; }
</style>
</head>
<body>
<main>
{{{contents}}}
</main>
</body>
</html>"#;

const DASHBOARD: &str = r#"<h1>{{title}}</h1>
<div style="margin-bottom: 20px;">
  <label>Select Mode:</label>
  {{#each modes}}
  <span class="radio-option"><input type="radio" id="mode-{{value}}" name="mode" value="{{value}}"{{#if checked}} checked{{/if}}><label for="mode-{{value}}" style="display: inline; font-weight: normal;">{{label}}</label></span>
  {{/each}}
</div>
<div id="year-dropdown-container" style="margin-bottom: 30px; display: {{year_selector_display}};">
  <label for="year-dropdown">Select Year:</label>
  <select id="year-dropdown">
    {{#each years}}
    <option value="{{value}}"{{#if selected}} selected{{/if}}>{{value}}</option>
    {{/each}}
  </select>
</div>
<div>
  <label for="country-dropdown">Select a country and view the number of times it has won the World Cup:</label>
  <select id="country-dropdown">
    <option value="" selected>Select a country</option>
    {{#each countries}}
    <option value="{{this}}">{{this}}</option>
    {{/each}}
  </select>
  <div id="country-win-output" style="margin-top: 10px; font-size: 18px;">{{win_count_text}}</div>
</div>
<div id="map-chart" style="margin-top: 30px;"></div>
<script>
let state = {{{state_json}}};
const initialOutputs = {{{outputs_json}}};

function applyOutputs(outputs) {
  for (const o of outputs) {
    if (o.target === 'year-selector') {
      document.getElementById('year-dropdown-container').style.display = o.value.display;
    } else if (o.target === 'win-count') {
      document.getElementById('country-win-output').textContent = o.value;
    } else if (o.target === 'map') {
      Plotly.react('map-chart', o.value.data, o.value.layout);
    }
  }
}

// Events go out one at a time, each carrying the state returned for the one before it.
let queue = Promise.resolve();

async function send(event) {
  const resp = await fetch('{{dispatch_path}}', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ state: state, event: event }),
  });
  if (!resp.ok) {
    console.error('dispatch failed', resp.status, await resp.text());
    return;
  }
  const body = await resp.json();
  state = body.state;
  applyOutputs(body.outputs);
}

function dispatch(event) {
  queue = queue.then(() => send(event)).catch(err => console.error('dispatch failed', err));
}

document.querySelectorAll('input[name="mode"]').forEach(radio => {
  radio.addEventListener('change', e => dispatch({ input: 'mode', value: e.target.value }));
});
document.getElementById('year-dropdown').addEventListener('change', e => {
  dispatch({ input: 'year', value: Number(e.target.value) });
});
document.getElementById('country-dropdown').addEventListener('change', e => {
  dispatch({ input: 'country', value: e.target.value || null });
});

applyOutputs(initialOutputs);
</script>"#;

/// Creates the engine with every page template registered.
pub fn new_engine() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string("main", MAIN_LAYOUT)
        .context("main layout")?;
    handlebars
        .register_template_string("dashboard", DASHBOARD)
        .context("dashboard template")?;
    Ok(handlebars)
}

/// Renders `template` with `data` and wraps the result in the main layout.
pub fn render_page<T: Serialize>(
    engine: &Handlebars<'_>,
    title: &str,
    template: &str,
    data: &T,
) -> Result<String> {
    let contents = engine
        .render(template, data)
        .with_context(|| format!("rendering {template}"))?;
    engine
        .render(
            "main",
            &json!({
                "title": title,
                "contents": contents,
            }),
        )
        .context("rendering main layout")
}

/// Serializes `value` for embedding inside a `<script>` block.
pub fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Creates an HTML response for displaying an `anyhow::Error`.
pub fn to_error_response(err: &anyhow::Error) -> HttpResponse {
    log::error!("page render failed: {err:?}");
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<!DOCTYPE html><html><body><h1>Error</h1><pre><code>{}</code></pre></body></html>",
            handlebars::html_escape(&format!("{err:?}"))
        ))
}

pub fn to_html_response(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

/// Converts a rendered page or its error into a response.
pub fn to_response(result: Result<String>) -> impl Responder {
    match result {
        Ok(page) => to_html_response(page),
        Err(e) => to_error_response(&e),
    }
}
