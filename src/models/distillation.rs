//! Distillation models.
//!
//! This module contains models for distillation column design, starting
//! with the graphical McCabe-Thiele construction for binary systems.

pub mod mccabe_thiele;
