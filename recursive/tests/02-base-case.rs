// With a single level there is nothing to recurse into: the family is just
// the base case, the expansion copied verbatim, then a blank line.

use recursive::recursive_family;

const HEADER: &str = recursive_family!("D", "a, _", "case a: out(a); break;", 1);

fn main() {
    assert_eq!(HEADER, "#define D_1(a, _) case a: out(a); break;\n\n");
}
