//! qturb Visualization
//!
//! Turns a run's turbulence fields into an animated Plotly figure and
//! renders circuits and measurement counts as text.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array3;
//! use qturb_field::{PressurePoint, TurbulenceField};
//! use qturb_viz::{assemble_figure, to_html};
//!
//! let fields: Vec<_> = [0.1, 0.2]
//!     .into_iter()
//!     .map(|t| TurbulenceField { time_step: t, values: Array3::zeros((3, 3, 3)) })
//!     .collect();
//! let points = [PressurePoint::new(1, 1, 1, 10.0)];
//!
//! let figure = assemble_figure(&fields, &points, fields.len()).unwrap();
//! assert_eq!(figure.frames.len(), 2);
//! assert!(to_html(&figure).unwrap().contains("timestep_1"));
//! ```

pub mod assembler;
pub mod diagram;
pub mod error;
pub mod figure;
pub mod histogram;
pub mod html;

pub use assembler::{assemble_figure, frame_name};
pub use diagram::draw_circuit;
pub use error::{VizError, VizResult};
pub use figure::{Figure, Frame, Layout, Trace};
pub use histogram::{DEFAULT_MAX_ROWS, render_histogram};
pub use html::{to_html, write_html, write_json};
