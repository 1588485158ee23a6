// `erecursive_family!` is the same macro usable in expression position on
// compilers without native function-like proc macros in expressions.

use recursive::erecursive_family;

fn main() {
    let header: &str = erecursive_family!("E", "a, v", "a = v,", 2);
    assert!(header.starts_with("#define E_1(a, v) a = v,\n\n"));
    assert!(header.ends_with("    a = v, E_1(__VA_ARGS__)\n\n"));
}
