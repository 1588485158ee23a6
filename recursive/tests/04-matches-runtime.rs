// The compile-time expansion and the runtime generator produce the same
// text for the same request, including for the full 128 level families.

use recursive::presets::ENUM_DISPLAY;
use recursive::{recursive_family, GenerationRequest, MacroFamily};

const ATTRIBUTE: &str =
    recursive_family!("_elf_enum_display_attribute_helper", "a_0, v_0", "a_0 = v_0,", 128);
const DISPLAY: &str = recursive_family!(
    "_elf_enum_display_display_helper",
    "a_0, _",
    "case a_0: stream << #a_0; break;",
    128
);

fn main() {
    for (header, (name, args, exp)) in [ATTRIBUTE, DISPLAY].iter().zip(ENUM_DISPLAY.iter()) {
        let request = GenerationRequest::new(*name, *args, *exp, 128).unwrap();
        assert_eq!(*header, MacroFamily::generate(&request).render());
    }
}
