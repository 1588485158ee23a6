use std::fmt;

use crate::GenerationRequest;

/// Token the host preprocessor uses for the trailing variadic arguments.
pub const VA_ARGS: &str = "__VA_ARGS__";

/// One `#define` of a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    name: String,
    level: usize,
    parameter_list: String,
    body: String,
}

impl MacroDefinition {
    /// The level 1 macro: the argument pattern alone, the expansion unmodified.
    pub fn base(req: &GenerationRequest) -> Self {
        MacroDefinition {
            name: level_name(req.name(), 1),
            level: 1,
            parameter_list: req.arg_pattern().to_owned(),
            body: req.expansion().to_owned(),
        }
    }

    /// Level `k > 1`: takes a trailing `...` and hands it to level `k - 1`.
    pub fn recursive(req: &GenerationRequest, level: usize) -> Self {
        debug_assert!(level > 1);
        MacroDefinition {
            name: level_name(req.name(), level),
            level,
            parameter_list: format!("{}, ...", req.arg_pattern()),
            body: format!(
                "{} {}({})",
                req.expansion(),
                level_name(req.name(), level - 1),
                VA_ARGS
            ),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn parameter_list(&self) -> &str {
        &self.parameter_list
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn level_name(prefix: &str, level: usize) -> String {
    format!("{}_{}", prefix, level)
}

impl fmt::Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == 1 {
            write!(f, "#define {}({}) {}", self.name, self.parameter_list, self.body)
        } else {
            write!(
                f,
                "#define {}({}) \\\n    {}",
                self.name, self.parameter_list, self.body
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new("E", "a, v", "a = v,", 3).unwrap()
    }

    #[test]
    fn base_case_has_no_recursive_call() {
        let def = MacroDefinition::base(&request());
        assert_eq!(def.name(), "E_1");
        assert_eq!(def.parameter_list(), "a, v");
        assert_eq!(def.body(), "a = v,");
        assert_eq!(def.to_string(), "#define E_1(a, v) a = v,");
    }

    #[test]
    fn recursive_case_calls_previous_level() {
        let def = MacroDefinition::recursive(&request(), 3);
        assert_eq!(def.level(), 3);
        assert_eq!(def.parameter_list(), "a, v, ...");
        assert_eq!(def.body(), "a = v, E_2(__VA_ARGS__)");
        assert_eq!(
            def.to_string(),
            "#define E_3(a, v, ...) \\\n    a = v, E_2(__VA_ARGS__)"
        );
    }
}
