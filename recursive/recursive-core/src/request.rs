use std::convert::TryFrom;

use crate::InvalidArityError;

/// The four inputs of one macro family. The arity is validated on
/// construction, so every `GenerationRequest` describes at least one level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationRequest {
    name: String,
    arg_pattern: String,
    expansion: String,
    max_arity: usize,
}

impl GenerationRequest {
    pub fn new(
        name: impl Into<String>,
        arg_pattern: impl Into<String>,
        expansion: impl Into<String>,
        max_arity: i64,
    ) -> Result<Self, InvalidArityError> {
        let max_arity = match usize::try_from(max_arity) {
            Ok(n) if n >= 1 => n,
            _ => return Err(InvalidArityError { arity: max_arity }),
        };
        Ok(GenerationRequest {
            name: name.into(),
            arg_pattern: arg_pattern.into(),
            expansion: expansion.into(),
            max_arity,
        })
    }

    /// Prefix shared by every macro of the family; level `k` is `<name>_<k>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_pattern(&self) -> &str {
        &self.arg_pattern
    }

    pub fn expansion(&self) -> &str {
        &self.expansion
    }

    pub fn max_arity(&self) -> usize {
        self.max_arity
    }
}
