//! Generator for bounded, self-referential families of variadic C
//! preprocessor macros.
//!
//! The preprocessor cannot loop over `__VA_ARGS__`, so a family unrolls the
//! loop ahead of time: `<name>_k` applies the expansion to its leading
//! arguments and hands the rest to `<name>_(k-1)`, down to `<name>_1`.
//!
//! ```
//! let defs = recursive_core::generate("E", "a, v", "a = v,", 2).unwrap();
//! assert_eq!(defs[0], "#define E_1(a, v) a = v,");
//! assert_eq!(defs[1], "#define E_2(a, v, ...) \\\n    a = v, E_1(__VA_ARGS__)");
//! ```

mod definition;
mod error;
mod family;
pub mod presets;
mod request;

pub use crate::definition::{MacroDefinition, VA_ARGS};
pub use crate::error::InvalidArityError;
pub use crate::family::{write_families, MacroFamily};
pub use crate::request::GenerationRequest;

/// Renders every definition of the family, level 1 first. Fails before
/// producing anything if `max_arity < 1`.
pub fn generate(
    name: &str,
    arg_pattern: &str,
    expansion: &str,
    max_arity: i64,
) -> Result<Vec<String>, InvalidArityError> {
    let request = GenerationRequest::new(name, arg_pattern, expansion, max_arity)?;
    Ok(MacroFamily::generate(&request)
        .iter()
        .map(ToString::to_string)
        .collect())
}
