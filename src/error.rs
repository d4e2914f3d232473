use thiserror::Error;

/// Errors raised by the route planner
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PlanError {
    /// The search hit its depth or node budget before finishing
    #[error(
        "search exhausted after {nodes} nodes (max_depth = {max_depth}, max_nodes = {max_nodes})"
    )]
    SearchExhausted {
        max_depth: usize,
        max_nodes: usize,
        nodes: usize,
    },

    #[error("non-finite coordinate in {what}")]
    NonFinite { what: String },

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

impl PlanError {
    pub fn non_finite(what: impl Into<String>) -> Self {
        Self::NonFinite { what: what.into() }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlanError::SearchExhausted {
            max_depth: 4,
            max_nodes: 10,
            nodes: 11,
        };
        assert!(err.to_string().contains("exhausted after 11 nodes"));

        assert_eq!(
            PlanError::non_finite("start").to_string(),
            "non-finite coordinate in start"
        );
        assert!(
            PlanError::invalid_config("max_nodes must be positive")
                .to_string()
                .contains("max_nodes")
        );
    }
}
