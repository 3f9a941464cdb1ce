//! Plotly figure schema.
//!
//! Only the attributes the turbulence animation sets are modelled; the
//! serialized form is what `Plotly.newPlot` and `Plotly.addFrames` accept.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete animated figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces shown before the animation starts.
    pub data: Vec<Trace>,
    /// Layout including animation controls.
    pub layout: Layout,
    /// Animation frames.
    pub frames: Vec<Frame>,
}

impl Figure {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to an indented JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a figure from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Look up a frame by name.
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.name == name)
    }
}

/// A named animation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame name referenced by slider steps.
    pub name: String,
    /// Traces replacing the figure's data in this frame.
    pub data: Vec<Trace>,
}

/// A `scatter3d` trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Plotly trace type.
    #[serde(rename = "type")]
    pub kind: String,
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Z coordinates.
    pub z: Vec<f64>,
    /// Drawing mode.
    pub mode: String,
    /// Marker styling.
    pub marker: Marker,
    /// Legend name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Trace {
    /// A marker-only 3D scatter trace.
    pub fn scatter3d(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, marker: Marker) -> Self {
        Self {
            kind: "scatter3d".into(),
            x,
            y,
            z,
            mode: "markers".into(),
            marker,
            name: None,
        }
    }

    /// Set the legend name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Marker styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker size in pixels.
    pub size: u32,
    /// One color for all points, or a value per point mapped through the
    /// color scale.
    pub color: MarkerColor,
    /// Named color scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Color bar next to the plot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// Marker color specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    /// A CSS color name.
    Single(String),
    /// Per-point values.
    Values(Vec<f64>),
}

/// Color bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    /// Color bar title.
    pub title: Title,
}

/// A text title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Title text.
    pub text: String,
}

impl Title {
    /// Create a title.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Figure title.
    pub title: Title,
    /// 3D scene axes.
    pub scene: Scene,
    /// Button menus.
    pub updatemenus: Vec<UpdateMenu>,
    /// Sliders.
    pub sliders: Vec<Slider>,
}

/// 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// X axis.
    pub xaxis: Axis,
    /// Y axis.
    pub yaxis: Axis,
    /// Z axis.
    pub zaxis: Axis,
}

/// A scene axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: Title,
}

impl Axis {
    /// An axis with a title.
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

/// Padding in pixels. Unset sides are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Top.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    /// Right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    /// Bottom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

/// A menu of buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenu {
    /// Menu type, `"buttons"` or `"dropdown"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The buttons.
    pub buttons: Vec<Button>,
    /// Layout direction.
    pub direction: String,
    /// Padding.
    pub pad: Pad,
    /// Highlight the active button.
    pub showactive: bool,
    /// Horizontal position.
    pub x: f64,
    /// Horizontal anchor.
    pub xanchor: String,
    /// Vertical position.
    pub y: f64,
    /// Vertical anchor.
    pub yanchor: String,
}

/// A menu button invoking a Plotly method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button text.
    pub label: String,
    /// Plotly method name.
    pub method: String,
    /// Method arguments.
    pub args: Vec<Value>,
}

/// An animation slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    /// Current value readout.
    pub currentvalue: CurrentValue,
    /// Padding.
    pub pad: Pad,
    /// One step per frame.
    pub steps: Vec<SliderStep>,
}

/// Slider readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentValue {
    /// Text before the value.
    pub prefix: String,
}

/// A slider step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderStep {
    /// Method arguments.
    pub args: Vec<Value>,
    /// Step label.
    pub label: String,
    /// Plotly method name.
    pub method: String,
}
