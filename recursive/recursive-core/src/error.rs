use thiserror::Error;

/// Rejected `max_arity`: a family needs at least one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid arity {arity}: a macro family needs a maximum arity of at least 1")]
pub struct InvalidArityError {
    pub arity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_rejected_value() {
        let err = InvalidArityError { arity: -1 };
        assert_eq!(
            err.to_string(),
            "invalid arity -1: a macro family needs a maximum arity of at least 1"
        );
    }
}
