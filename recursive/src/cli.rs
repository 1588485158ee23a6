use clap::{ArgAction, Parser};

use crate::presets::{enum_display_families, DEFAULT_MAX_ARITY};
use crate::{GenerationRequest, InvalidArityError};

/// Emits recursive variadic macro families as a C header fragment.
#[derive(Debug, Parser)]
#[command(name = "recursive-gen")]
#[command(about = "Generate recursive variadic preprocessor macro families")]
pub struct Cli {
    /// Number of macros in every family.
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ARITY as i64, allow_negative_numbers = true)]
    pub arity: i64,
    /// Emit this family instead of the enum display helpers (repeatable).
    #[arg(
        long,
        num_args = 3,
        value_names = ["NAME", "ARGS", "EXPANSION"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub family: Vec<String>,
}

impl Cli {
    /// Every family to write, in command-line order. Validated as a whole so
    /// that a bad arity is reported before anything is emitted.
    pub fn requests(&self) -> Result<Vec<GenerationRequest>, InvalidArityError> {
        if self.family.is_empty() {
            return enum_display_families(self.arity);
        }
        self.family
            .chunks(3)
            .map(|f| GenerationRequest::new(f[0].as_str(), f[1].as_str(), f[2].as_str(), self.arity))
            .collect()
    }
}
