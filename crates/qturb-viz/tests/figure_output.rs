//! End-to-end figure assembly and file output.

use ndarray::Array3;
use qturb_field::{PressurePoint, TurbulenceField};
use qturb_viz::{Figure, assemble_figure, frame_name, write_html, write_json};

fn fields(count: usize, size: usize) -> Vec<TurbulenceField> {
    (0..count)
        .map(|i| TurbulenceField {
            time_step: 0.1 * (i + 1) as f64,
            values: Array3::from_elem((size, size, size), i as f64),
        })
        .collect()
}

fn default_points() -> Vec<PressurePoint> {
    vec![
        PressurePoint::new(5, 5, 5, 10.0),
        PressurePoint::new(3, 7, 2, 15.0),
        PressurePoint::new(8, 2, 6, 5.0),
    ]
}

#[test]
fn ten_steps_give_ten_frames_and_slider_steps() {
    let figure = assemble_figure(&fields(10, 4), &default_points(), 10).unwrap();

    assert_eq!(figure.frames.len(), 10);
    assert_eq!(figure.layout.sliders[0].steps.len(), 10);
    for (i, frame) in figure.frames.iter().enumerate() {
        assert_eq!(frame.name, frame_name(i));
        assert_eq!(frame.data.len(), 4);
        assert_eq!(frame.data[0].x.len(), 64);
    }
    assert_eq!(
        figure.data[3].name.as_deref(),
        Some("Pressure Point (Intensity: 5.00)")
    );
}

#[test]
fn html_contains_serialized_frames() {
    let figure = assemble_figure(&fields(3, 2), &default_points(), 3).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("turbulence.html");

    write_html(&figure, &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("cdn.plot.ly"));
    for i in 0..3 {
        assert!(html.contains(&format!("\"name\":\"timestep_{i}\"")));
    }
    assert!(html.contains("Turbulence Intensity"));
}

#[test]
fn json_output_parses_back() {
    let figure = assemble_figure(&fields(2, 2), &[], 2).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.json");

    write_json(&figure, &path).unwrap();

    let parsed: Figure = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, figure);
}

#[test]
fn writing_into_missing_directory_fails() {
    let figure = assemble_figure(&fields(1, 1), &[], 1).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let result = write_html(&figure, dir.path().join("missing").join("out.html"));
    assert!(matches!(result, Err(qturb_viz::VizError::Io(_))));
}
