//! Synthetic turbulence fields.
//!
//! A field is an S×S×S grid of independent standard-normal samples with
//! a constant `intensity × t` added around each [`PressurePoint`]. There is
//! no fluid dynamics here; the field is decoration for the animation.
//!
//! ```rust
//! use qturb_field::{FieldGenerator, PressurePoint};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let generator = FieldGenerator::new(10, vec![PressurePoint::new(5, 5, 5, 10.0)]);
//! let field = generator.generate(0.1, &mut StdRng::seed_from_u64(7));
//! assert_eq!(field.point_cloud().len(), 1000);
//! ```

mod field;
mod pressure;

pub use field::{FieldGenerator, FieldStats, PointCloud, TurbulenceField};
pub use pressure::{PressurePoint, slice_range};
