use serde_json::{Map, Value};
use thiserror::Error;

use super::models::{ImageRef, JobInput, WorkflowParams};

/// Required keys of the parameterized form, in the order they are
/// reported back when missing.
const REQUIRED_PARAMS: [&str; 6] = [
    "image",
    "prompt",
    "guidance_scale",
    "steps",
    "seed",
    "max_size",
];

/// Validation failures, with the exact user-visible messages the
/// queue platform contract expects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please provide input")]
    MissingInput,

    #[error("Invalid JSON format in input")]
    InvalidJson,

    #[error("'images' must be a list of objects with 'name' and 'image' keys")]
    InvalidImages,

    #[error("Missing required parameter(s): {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
}

/// Validate and normalize a raw job payload.
///
/// Accepts a structured mapping, a JSON-encoded string of one, or
/// nothing at all. Returns the canonical [`JobInput`] or the error
/// to report back to the submitter. Pure; does not touch any state.
pub fn validate_input(raw: Option<&Value>) -> Result<JobInput, InputError> {
    let raw = raw.ok_or(InputError::MissingInput)?;

    // A JSON-encoded string payload is decoded exactly once.
    let decoded;
    let payload = match raw {
        Value::Null => return Err(InputError::MissingInput),
        Value::String(text) => {
            decoded =
                serde_json::from_str::<Value>(text).map_err(|_| InputError::InvalidJson)?;
            &decoded
        }
        other => other,
    };

    match payload.as_object() {
        Some(fields) if fields.contains_key("workflow") => workflow_form(fields),
        Some(fields) => parameterized_form(fields),
        // Anything that is not a mapping carries neither a workflow
        // nor any of the required parameters.
        None => parameterized_form(&Map::new()),
    }
}

/// Workflow form: the workflow itself passes through unchanged;
/// `images` and `comfy_org_api_key` are optional.
fn workflow_form(fields: &Map<String, Value>) -> Result<JobInput, InputError> {
    let workflow = fields.get("workflow").cloned().unwrap_or(Value::Null);

    let images = match fields.get("images") {
        None | Some(Value::Null) => None,
        Some(value) => Some(image_refs(value)?),
    };

    let comfy_org_api_key = fields
        .get("comfy_org_api_key")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(JobInput::Workflow {
        workflow,
        images,
        comfy_org_api_key,
    })
}

/// Every element must be an object carrying both `name` and `image`.
fn image_refs(value: &Value) -> Result<Vec<ImageRef>, InputError> {
    let entries = value.as_array().ok_or(InputError::InvalidImages)?;

    entries
        .iter()
        .map(|entry| {
            let fields = entry.as_object().ok_or(InputError::InvalidImages)?;
            let name = fields
                .get("name")
                .and_then(Value::as_str)
                .ok_or(InputError::InvalidImages)?;
            let image = fields
                .get("image")
                .and_then(Value::as_str)
                .ok_or(InputError::InvalidImages)?;

            Ok(ImageRef {
                name: name.to_owned(),
                image: image.to_owned(),
            })
        })
        .collect()
}

/// Parameterized form: all six keys are required; values pass through
/// without coercion or range checks.
fn parameterized_form(fields: &Map<String, Value>) -> Result<JobInput, InputError> {
    let missing: Vec<&'static str> = REQUIRED_PARAMS
        .iter()
        .copied()
        .filter(|key| !fields.contains_key(*key))
        .collect();

    if !missing.is_empty() {
        return Err(InputError::MissingParameters(missing));
    }

    let take = |key: &str| fields.get(key).cloned().unwrap_or(Value::Null);

    Ok(JobInput::Params {
        workflow_params: WorkflowParams {
            image: take("image"),
            prompt: take("prompt"),
            guidance_scale: take("guidance_scale"),
            steps: take("steps"),
            seed: take("seed"),
            max_size: take("max_size"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workflow_passes_through_unchanged() {
        let raw = json!({"workflow": {"3": {"class_type": "KSampler"}}});

        let input = validate_input(Some(&raw)).unwrap();
        match input {
            JobInput::Workflow {
                workflow,
                images,
                comfy_org_api_key,
            } => {
                assert_eq!(workflow, json!({"3": {"class_type": "KSampler"}}));
                assert!(images.is_none());
                assert!(comfy_org_api_key.is_none());
            }
            JobInput::Params { .. } => panic!("expected workflow form"),
        }
    }

    #[test]
    fn api_key_is_extracted() {
        let raw = json!({"workflow": {}, "comfy_org_api_key": "sk-test"});

        let input = validate_input(Some(&raw)).unwrap();
        match input {
            JobInput::Workflow {
                comfy_org_api_key, ..
            } => assert_eq!(comfy_org_api_key.as_deref(), Some("sk-test")),
            JobInput::Params { .. } => panic!("expected workflow form"),
        }
    }

    #[test]
    fn explicit_null_images_treated_as_absent() {
        let raw = json!({"workflow": {}, "images": null});

        let input = validate_input(Some(&raw)).unwrap();
        match input {
            JobInput::Workflow { images, .. } => assert!(images.is_none()),
            JobInput::Params { .. } => panic!("expected workflow form"),
        }
    }

    #[test]
    fn empty_images_list_is_valid() {
        let raw = json!({"workflow": {}, "images": []});

        let input = validate_input(Some(&raw)).unwrap();
        match input {
            JobInput::Workflow { images, .. } => assert_eq!(images, Some(vec![])),
            JobInput::Params { .. } => panic!("expected workflow form"),
        }
    }

    #[test]
    fn images_must_be_a_list() {
        let raw = json!({"workflow": {}, "images": {"name": "a.png", "image": "b64"}});

        let err = validate_input(Some(&raw)).unwrap_err();
        assert_eq!(err, InputError::InvalidImages);
    }

    #[test]
    fn image_entry_with_non_string_value_rejected() {
        let raw = json!({"workflow": {}, "images": [{"name": "a.png", "image": 7}]});

        let err = validate_input(Some(&raw)).unwrap_err();
        assert_eq!(err, InputError::InvalidImages);
    }

    #[test]
    fn missing_parameters_reported_in_declared_order() {
        let raw = json!({"seed": 1, "prompt": "x"});

        let err = validate_input(Some(&raw)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameter(s): image, guidance_scale, steps, max_size"
        );
    }

    #[test]
    fn non_object_payload_misses_every_parameter() {
        let raw = json!([1, 2, 3]);

        let err = validate_input(Some(&raw)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameter(s): image, prompt, guidance_scale, steps, seed, max_size"
        );
    }

    #[test]
    fn json_null_treated_as_missing() {
        let err = validate_input(Some(&Value::Null)).unwrap_err();
        assert_eq!(err, InputError::MissingInput);
    }

    #[test]
    fn string_payload_decoded_once() {
        let raw = Value::String(r#"{"workflow": {"key": "value"}}"#.to_string());

        let input = validate_input(Some(&raw)).unwrap();
        assert!(matches!(input, JobInput::Workflow { .. }));
    }
}
