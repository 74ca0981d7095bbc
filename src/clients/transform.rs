//! Response-transform pipeline.
//!
//! Every response body enters the pipeline as the raw text wrapped in
//! [`serde_json::Value::String`]. The first stage, [`parse_json_body`], turns
//! that text into structured JSON when it parses. Caller-supplied
//! transformers then run in order, each receiving the previous stage's output.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A caller-supplied body transformation.
pub type ResponseTransformer = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Parses a string body as JSON.
///
/// Non-string input is passed through unchanged, as is text that is not
/// valid JSON.
///
/// # Example
///
/// ```rust
/// use resource_api::clients::parse_json_body;
/// use serde_json::{json, Value};
///
/// assert_eq!(parse_json_body(Value::from(r#"{"a":1}"#)), json!({"a": 1}));
/// assert_eq!(parse_json_body(json!({"a": 1})), json!({"a": 1}));
/// assert_eq!(parse_json_body(Value::from("plain text")), Value::from("plain text"));
/// ```
#[must_use]
pub fn parse_json_body(body: Value) -> Value {
    match body {
        Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        other => other,
    }
}

/// The ordered sequence of stages applied to every response body.
#[derive(Clone)]
pub struct TransformPipeline {
    stages: Vec<ResponseTransformer>,
}

impl TransformPipeline {
    /// Builds a pipeline: JSON parsing first, then `transformers` in order.
    #[must_use]
    pub fn new(transformers: &[ResponseTransformer]) -> Self {
        let mut stages: Vec<ResponseTransformer> = Vec::with_capacity(transformers.len() + 1);
        stages.push(Arc::new(parse_json_body));
        stages.extend(transformers.iter().cloned());
        Self { stages }
    }

    /// Runs `body` through every stage.
    #[must_use]
    pub fn apply(&self, body: Value) -> Value {
        self.stages.iter().fold(body, |acc, stage| stage(acc))
    }

    /// Returns the number of stages, including the built-in JSON stage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
