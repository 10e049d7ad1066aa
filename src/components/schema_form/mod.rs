//! Schema-driven form rendering
//!
//! Turns a generated form schema into live input controls in two steps: a
//! pure planning pass that deterministically assigns one widget per field,
//! and a rendering adapter that materializes the plan into the view. The
//! typed submission payload is assembled from the same plan.

pub mod fields;
pub mod payload;
pub mod plan;

pub use fields::*;
pub use payload::*;
pub use plan::*;
