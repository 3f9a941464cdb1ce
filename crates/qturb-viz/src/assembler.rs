//! Builds the animated turbulence figure from a sequence of fields.

use serde_json::json;
use tracing::{debug, instrument};

use qturb_field::{PressurePoint, TurbulenceField};

use crate::error::{VizError, VizResult};
use crate::figure::{
    Axis, Button, ColorBar, CurrentValue, Figure, Frame, Layout, Marker, MarkerColor, Pad, Scene,
    Slider, SliderStep, Title, Trace, UpdateMenu,
};

/// Figure title.
pub const FIGURE_TITLE: &str = "3D Turbulence Simulation with Time Evolution (Quantum-Enhanced)";

/// Frame delay during playback, in milliseconds.
pub const PLAY_FRAME_DURATION_MS: u64 = 100;

/// Name of the frame for time-step index `i`.
pub fn frame_name(i: usize) -> String {
    format!("timestep_{i}")
}

/// Scatter trace of every cell in the field, colored by value.
pub fn field_trace(field: &TurbulenceField) -> Trace {
    let cloud = field.point_cloud();
    let to_f64 = |v: Vec<usize>| v.into_iter().map(|c| c as f64).collect();
    Trace::scatter3d(
        to_f64(cloud.x),
        to_f64(cloud.y),
        to_f64(cloud.z),
        Marker {
            size: 4,
            color: MarkerColor::Values(cloud.values),
            colorscale: Some("Viridis".into()),
            opacity: 0.8,
            colorbar: Some(ColorBar {
                title: Title::new("Turbulence Intensity"),
            }),
        },
    )
}

/// Single-point marker trace for a pressure point.
pub fn pressure_trace(point: &PressurePoint) -> Trace {
    Trace::scatter3d(
        vec![point.x as f64],
        vec![point.y as f64],
        vec![point.z as f64],
        Marker {
            size: 8,
            color: MarkerColor::Single("red".into()),
            colorscale: None,
            opacity: 0.8,
            colorbar: None,
        },
    )
    .with_name(format!("Pressure Point (Intensity: {:.2})", point.intensity))
}

fn traces_for(field: &TurbulenceField, pressure_points: &[PressurePoint]) -> Vec<Trace> {
    std::iter::once(field_trace(field))
        .chain(pressure_points.iter().map(pressure_trace))
        .collect()
}

fn play_pause_menu() -> UpdateMenu {
    UpdateMenu {
        kind: "buttons".into(),
        buttons: vec![
            Button {
                label: "Play".into(),
                method: "animate".into(),
                args: vec![
                    json!(null),
                    json!({
                        "frame": {"duration": PLAY_FRAME_DURATION_MS, "redraw": true},
                        "fromcurrent": true,
                        "mode": "immediate",
                        "transition": {"duration": 0},
                    }),
                ],
            },
            Button {
                label: "Pause".into(),
                method: "animate".into(),
                args: vec![
                    json!([null]),
                    json!({
                        "frame": {"duration": 0, "redraw": true},
                        "mode": "immediate",
                    }),
                ],
            },
        ],
        direction: "left".into(),
        pad: Pad {
            r: Some(10),
            t: Some(87),
            b: None,
        },
        showactive: false,
        x: 0.1,
        xanchor: "right".into(),
        y: 0.0,
        yanchor: "top".into(),
    }
}

fn time_slider(num_time_steps: usize) -> Slider {
    Slider {
        currentvalue: CurrentValue {
            prefix: "Time Step: ".into(),
        },
        pad: Pad {
            t: Some(50),
            r: None,
            b: Some(10),
        },
        steps: (0..num_time_steps)
            .map(|i| SliderStep {
                args: vec![
                    json!([frame_name(i)]),
                    json!({
                        "frame": {"duration": 0, "redraw": true},
                        "mode": "immediate",
                    }),
                ],
                label: i.to_string(),
                method: "animate".into(),
            })
            .collect(),
    }
}

/// Assemble the animated figure.
///
/// The initial view shows the first field; frame `timestep_{i}` shows field
/// `i`. Every view carries one extra trace per pressure point.
#[instrument(skip_all, fields(fields = fields.len(), pressure_points = pressure_points.len()))]
pub fn assemble_figure(
    fields: &[TurbulenceField],
    pressure_points: &[PressurePoint],
    num_time_steps: usize,
) -> VizResult<Figure> {
    let Some(first) = fields.first() else {
        return Err(VizError::NoFields);
    };
    if fields.len() != num_time_steps {
        return Err(VizError::StepCountMismatch {
            fields: fields.len(),
            time_steps: num_time_steps,
        });
    }

    let frames: Vec<Frame> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| Frame {
            name: frame_name(i),
            data: traces_for(field, pressure_points),
        })
        .collect();
    debug!("Built {} frames", frames.len());

    Ok(Figure {
        data: traces_for(first, pressure_points),
        layout: Layout {
            title: Title::new(FIGURE_TITLE),
            scene: Scene {
                xaxis: Axis::titled("X Axis"),
                yaxis: Axis::titled("Y Axis"),
                zaxis: Axis::titled("Z Axis"),
            },
            updatemenus: vec![play_pause_menu()],
            sliders: vec![time_slider(num_time_steps)],
        },
        frames,
    })
}
