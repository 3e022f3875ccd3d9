//! JSON normalization for captured context/extra text.
//!
//! Multi-line dialect captures may carry raw newlines inside an otherwise
//! valid JSON string, so the text is cleaned into single-line JSON input
//! before decoding. Decode failures are resolved by the configured policy
//! chain: `json_as_text` > `json_fail_soft` > `skip_exceptions` > error.

use serde_json::Value;

use crate::extract::ExtractOptions;
use crate::model::{ParseError, Payload, SourceId};

/// Normalize one captured context/extra substring into a typed payload.
pub fn normalize(
    raw: &str,
    options: &ExtractOptions,
    source: &SourceId,
) -> Result<Payload, ParseError> {
    // Carriage returns vanish; literal newlines become the two-character
    // escape so the text is valid single-line JSON input.
    let cleaned = raw.replace('\r', "").replace('\n', "\\n");

    if options.json_as_text {
        return Ok(Payload::Text(cleaned.trim().to_string()));
    }

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(map)) => Ok(Payload::Map(map)),
        Ok(Value::Array(items)) => Ok(Payload::List(items)),
        Ok(Value::Null) => Ok(Payload::Absent),
        // Bare scalars wrap into a one-element list so consumers always get
        // a collection or mapping when content exists.
        Ok(scalar) => Ok(Payload::List(vec![scalar])),
        Err(err) => {
            if options.json_fail_soft {
                tracing::trace!(%err, "payload decode failed, keeping raw text");
                Ok(Payload::Text(cleaned.trim().to_string()))
            } else if options.skip_exceptions {
                tracing::trace!(%err, "payload decode failed, dropping value");
                Ok(Payload::Absent)
            } else {
                Err(ParseError::Content {
                    source_id: source.to_string(),
                    detail: format!("Failed to decode JSON: {cleaned}"),
                })
            }
        }
    }
}
