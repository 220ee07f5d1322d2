//! # Choropleth Figures
//!
//! A small serializable model of a Plotly figure, limited to what the map
//! needs: categorical choropleth traces keyed by ISO-3 country codes and a
//! fixed layout. The browser hands the JSON straight to `Plotly.react`, which
//! resolves each code to its country geometry.

use serde::Serialize;

pub const WIDTH: u32 = 1025;
pub const HEIGHT: u32 = 550;
const TITLE_FONT_FAMILY: &str = "Arial Black";
const TITLE_FONT_SIZE: u32 = 24;
const TITLE_COLOR: &str = "black";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

/// One category on the map. Every region in the trace shares one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub name: String,
    pub locations: Vec<String>,
    pub locationmode: &'static str,
    z: Vec<u8>,
    pub colorscale: [(f32, String); 2],
    showscale: bool,
    pub showlegend: bool,
    legendgroup: String,
    pub hovertext: Vec<String>,
    hovertemplate: &'static str,
}

impl ChoroplethTrace {
    /// Builds a single-color trace from `(code, hover label)` pairs.
    pub fn category<I, C, L>(name: &str, color: &str, regions: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let (locations, hovertext): (Vec<String>, Vec<String>) = regions
            .into_iter()
            .map(|(code, label)| (code.into(), label.into()))
            .unzip();
        Self {
            kind: "choropleth",
            name: name.to_string(),
            z: vec![1; locations.len()],
            locations,
            locationmode: "ISO-3",
            colorscale: [
                (0.0, color.to_string()),
                (1.0, color.to_string()),
            ],
            showscale: false,
            showlegend: true,
            legendgroup: name.to_string(),
            hovertext,
            hovertemplate: "%{hovertext}<extra>%{fullData.name}</extra>",
        }
    }

    #[cfg(test)]
    pub fn color(&self) -> &str {
        &self.colorscale[0].1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub width: u32,
    pub height: u32,
    pub showlegend: bool,
    pub legend: Legend,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    x: f32,
    y: f32,
    xanchor: &'static str,
    yanchor: &'static str,
    font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    size: u32,
    color: &'static str,
    family: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    scope: &'static str,
    showframe: bool,
}

impl Layout {
    fn new(title: String, showlegend: bool) -> Self {
        Self {
            title: Title {
                text: title,
                x: 0.5,
                y: 0.95,
                xanchor: "center",
                yanchor: "top",
                font: Font {
                    size: TITLE_FONT_SIZE,
                    color: TITLE_COLOR,
                    family: TITLE_FONT_FAMILY,
                },
            },
            width: WIDTH,
            height: HEIGHT,
            showlegend,
            legend: Legend { x: 1.0, y: 1.0 },
            geo: Geo {
                scope: "world",
                showframe: false,
            },
        }
    }
}

impl Figure {
    /// A world map with the given traces and a legend.
    pub fn choropleth(title: impl Into<String>, data: Vec<ChoroplethTrace>) -> Self {
        Self {
            data,
            layout: Layout::new(title.into(), true),
        }
    }

    /// An empty world map that only carries a title.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::new(title.into(), false),
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    #[cfg(test)]
    pub fn trace(&self, name: &str) -> Option<&ChoroplethTrace> {
        self.data.iter().find(|t| t.name == name)
    }
}
