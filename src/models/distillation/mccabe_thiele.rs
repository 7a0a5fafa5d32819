//! McCabe-Thiele construction for binary distillation columns.
//!
//! The graphical McCabe-Thiele method counts equilibrium stages by stepping
//! between the vapor-liquid equilibrium curve and the section operating
//! lines. The numeric construction lives in [`core`]; [`diagram`] turns a
//! completed construction into drawable geometry, and the `plot` cargo
//! feature adds a `plot` module that renders that geometry to an image.

pub mod core;
pub mod diagram;

#[cfg(feature = "plot")]
pub mod plot;
