//! Recursive variadic macro families for the C preprocessor, available at
//! run time (`generate`, `write_families`), at compile time
//! (`recursive_family!`), and from the `recursive-gen` binary.

use proc_macro_hack::proc_macro_hack;

pub mod cli;

pub use recursive_core::*;
pub use recursive_impl::recursive_family;

#[proc_macro_hack]
pub use recursive_impl::erecursive_family;
