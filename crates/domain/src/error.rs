//! Common error types used across the workspace.

/// A response body could not be decoded into one of the domain schemas.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not valid JSON, or does not match the expected shape.
    #[error("invalid {schema} payload")]
    Json {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Wrap a `serde_json` failure for the named schema.
    #[must_use]
    pub fn json(schema: &'static str, source: serde_json::Error) -> Self {
        Self::Json { schema, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_schema_in_display() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = DecodeError::json("snapshot", source);
        assert_eq!(err.to_string(), "invalid snapshot payload");
    }

    #[test]
    fn should_expose_serde_error_as_source() {
        use std::error::Error;

        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = DecodeError::json("action reply", source);
        assert!(err.source().is_some());
    }
}
