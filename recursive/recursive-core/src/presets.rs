//! The two families used to build `enum_display`-style enums: one chain
//! emits `Name = value,` enumerators, the other the matching
//! `case Name: stream << #Name; break;` arms.

use crate::{GenerationRequest, InvalidArityError};

pub const DEFAULT_MAX_ARITY: usize = 128;

pub const ATTRIBUTE_HELPER: &str = "_elf_enum_display_attribute_helper";
pub const DISPLAY_HELPER: &str = "_elf_enum_display_display_helper";

/// `(name, argument pattern, expansion)` of each enum display family.
pub const ENUM_DISPLAY: [(&str, &str, &str); 2] = [
    (ATTRIBUTE_HELPER, "a_0, v_0", "a_0 = v_0,"),
    (DISPLAY_HELPER, "a_0, _", "case a_0: stream << #a_0; break;"),
];

pub fn enum_display_families(max_arity: i64) -> Result<Vec<GenerationRequest>, InvalidArityError> {
    ENUM_DISPLAY
        .iter()
        .map(|(name, args, exp)| GenerationRequest::new(*name, *args, *exp, max_arity))
        .collect()
}
