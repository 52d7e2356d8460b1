//! # timber_core - Timber Beam Design Engine
//!
//! `timber_core` designs single-span timber beams to NZS AS 1720.1 with
//! loads and combinations to AS/NZS 1170. Inputs and outputs are plain
//! JSON-serializable values, so the engine can sit behind a CLI, a web
//! service or an assistant tool without adaptation.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take a request and return a result
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Missing data is visible**: a grade without shear or bearing values
//!   yields a failed "manual check required" result, never a silent zero
//!
//! ## Quick Start
//!
//! ```rust
//! use timber_core::{calculate, BeamDesignInput};
//!
//! let input = BeamDesignInput::example(false);
//! let result = calculate(&input).unwrap();
//!
//! for check in &result.checks {
//!     println!("{:<24} {:.0}%", check.name, check.utilisation);
//! }
//! println!("{}", result.summary.headline());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - analysis, deflection, design checks and the pipeline
//! - [`loads`] - load types, tributary widths, combinations, point loads
//! - [`materials`] - the grade table
//! - [`code_factors`] - k-factors and user overrides
//! - [`section`] - rectangular section properties
//! - [`equations`] - closed-form beam and section formulas
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod calculations;
pub mod code_factors;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BeamActions, BeamDesignInput, BeamDesignResult, CheckResult, DesignSummary};
pub use code_factors::{DesignFactors, LoadDuration, ResolvedFactors};
pub use errors::{CalcError, CalcResult};
pub use materials::{grade, MaterialGrade};
pub use section::TimberSection;
