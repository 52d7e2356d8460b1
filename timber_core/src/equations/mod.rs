//! # Structural Engineering Equations
//!
//! The closed-form formulas used by the design engine, kept in one place so
//! they can be checked against their references independently of how the
//! analysis combines them.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported and overhanging beam load cases
//! - [`section`] - Rectangular cross-section properties
//! - [`interpolation`] - Piecewise-linear lookup for code tables
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Sagging positive; hogging reported as a positive magnitude
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (negative means uplift)

pub mod beam;
pub mod interpolation;
pub mod section;

pub use beam::{
    back_span_sagging_moment,
    overhang_point_hogging_moment,
    overhang_point_reactions,
    overhang_point_tip_deflection,
    overhang_point_upward_deflection_between,
    overhang_uniform_hogging_moment,
    overhang_uniform_reactions,
    overhang_uniform_tip_deflection,
    overhang_uniform_upward_deflection_between,
    point_load_max_moment,
    point_load_midspan_deflection,
    point_load_reactions,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_reactions,
};

pub use interpolation::InterpolationTable;

pub use section::{
    bearing_area,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
    rectangular_shear_area,
};
