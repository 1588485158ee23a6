use std::io::{self, Write};
use std::slice;

use log::{debug, trace};

use crate::{GenerationRequest, MacroDefinition};

/// Every definition of one request, level 1 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroFamily {
    request: GenerationRequest,
    definitions: Vec<MacroDefinition>,
}

impl MacroFamily {
    pub fn generate(request: &GenerationRequest) -> Self {
        let n = request.max_arity();
        debug!("generating {} levels of `{}`", n, request.name());

        let mut definitions = Vec::with_capacity(n);
        definitions.push(MacroDefinition::base(request));
        for level in 2..=n {
            definitions.push(MacroDefinition::recursive(request, level));
        }
        for def in &definitions {
            trace!("{}", def.name());
        }

        MacroFamily {
            request: request.clone(),
            definitions,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn definitions(&self) -> &[MacroDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always false: a family has at least its base case.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, MacroDefinition> {
        self.definitions.iter()
    }

    /// The header fragment: each definition followed by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for def in &self.definitions {
            out.push_str(&def.to_string());
            out.push_str("\n\n");
        }
        out
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }
}

impl<'a> IntoIterator for &'a MacroFamily {
    type Item = &'a MacroDefinition;
    type IntoIter = slice::Iter<'a, MacroDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the families in order. Each one is rendered whole before it is
/// written, so two families never interleave on `out`.
pub fn write_families<W: Write + ?Sized>(
    out: &mut W,
    requests: &[GenerationRequest],
) -> io::Result<()> {
    for request in requests {
        let family = MacroFamily::generate(request);
        family.write_to(out)?;
        debug!("wrote `{}` ({} definitions)", request.name(), family.len());
    }
    Ok(())
}
