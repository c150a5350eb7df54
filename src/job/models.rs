//! Canonical job payload shapes.
//!
//! A raw payload is either a full workflow submission or the
//! parameterized shorthand. Two complete examples (as JSON):
//!
//! Workflow form:
//!
//! ```json
//! {
//!   "workflow": { "3": { "class_type": "KSampler", "inputs": { "...": "..." } } },
//!   "images": [
//!     { "name": "input.png", "image": "data:image/png;base64,iVBOR..." }
//!   ],
//!   "comfy_org_api_key": "sk-..."
//! }
//! ```
//!
//! Parameterized form:
//!
//! ```json
//! {
//!   "image": "data:image/png;base64,iVBOR...",
//!   "prompt": "a lighthouse at dusk",
//!   "guidance_scale": 3.5,
//!   "steps": 20,
//!   "seed": 123456,
//!   "max_size": 1024
//! }
//! ```
//!
//! Validation produces exactly one of the two [`JobInput`] variants.
//! The variants serialize back to the canonical shapes consumed
//! downstream, with explicit `null`s for absent optional fields.

use serde::Serialize;
use serde_json::Value;

/// Named reference image shipped alongside a workflow.
///
/// `image` holds the encoded bytes, either plain base64 or a
/// `data:` URI. Both fields are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRef {
    pub name: String,
    pub image: String,
}

/// The fixed parameter set of the templated-workflow form.
///
/// Values are passed through exactly as they arrived. The rendering
/// side owns range checks and numeric coercion, not this layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowParams {
    pub image: Value,
    pub prompt: Value,
    pub guidance_scale: Value,
    pub steps: Value,
    pub seed: Value,
    pub max_size: Value,
}

/// Canonical validated job input.
///
/// Discriminated by presence of the `workflow` key in the raw
/// payload. Untagged so serialization reproduces the flat canonical
/// shapes rather than an enum wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JobInput {
    /// Full workflow submission, optionally carrying reference images
    /// and an API key for ComfyUI-org-hosted nodes.
    Workflow {
        workflow: Value,
        images: Option<Vec<ImageRef>>,
        comfy_org_api_key: Option<String>,
    },
    /// Simplified parameter set for a templated workflow.
    Params { workflow_params: WorkflowParams },
}
