//! Job input model and validation for comfygate.
//!
//! Job payloads arrive from an external queue platform in one of two
//! shapes: a full rendering workflow (optionally with reference
//! images), or a fixed six-parameter set for a templated workflow.
//! This module normalizes both into a canonical [`JobInput`].
//!
//! ## Key Components
//!
//! - [`JobInput`] - Canonical validated payload, one of two forms
//! - [`ImageRef`] - Named reference image (base64 or data-URI)
//! - [`WorkflowParams`] - The six-field parameterized form
//! - [`validate_input`] - Single validation entry point

mod models;
mod validation;

pub use models::{ImageRef, JobInput, WorkflowParams};
pub use validation::{InputError, validate_input};
