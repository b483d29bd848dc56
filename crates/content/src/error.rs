//! Error types for the stride-content crate.

/// Error type for all fallible operations in the stride-content crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// Returned when the content bank JSON cannot be parsed.
    #[error("failed to parse content bank: {reason}")]
    Parse {
        /// Parser message, including line and column.
        reason: String,
    },

    /// Returned when the content bank cannot be serialized.
    #[error("failed to serialize content bank: {reason}")]
    Serialization {
        /// Serializer message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_parse() {
        let e = ContentError::Parse {
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to parse content bank: expected value at line 1 column 1"
        );
    }

    #[test]
    fn error_serialization() {
        let e = ContentError::Serialization {
            reason: "boom".to_string(),
        };
        assert_eq!(e.to_string(), "failed to serialize content bank: boom");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ContentError>();
    }
}
