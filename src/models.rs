//! Public separation models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into submodules by unit operation (e.g.,
//! `distillation`, `absorption`, `extraction`) based on an opinionated
//! taxonomy. This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. Sibling
//! modules (such as a model's `diagram` layer) are thin consumers of the
//! artifacts the core produces.

pub mod distillation;
