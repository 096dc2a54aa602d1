//! Tip calculation for the calculator screen.
//!
//! The whole calculation is one pure function of a [`TipRequest`](crate::TipRequest)
//! snapshot; helpers shared with currency formatting live in [`common`].

pub mod common;
pub mod tip;

pub use tip::{calculate, calculate_tip};
