//! Request validation and readiness checks for a ComfyUI render worker.
//!
//! Normalizes heterogeneous job payloads into a canonical shape and
//! polls the rendering server until it is ready to accept work. The
//! actual rendering, job queue, and worker runtime are external
//! collaborators.

pub mod config;
pub mod humanize;
pub mod job;
pub mod observability;
pub mod upstream;
