use ternlint_ast::{Ranged, TextRange};

use crate::registry::Rule;
use crate::violation::Violation;

/// One reported finding, tied to a source range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: Rule,
    /// The message body to display to the user.
    pub body: String,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new<T: Violation>(kind: T, range: TextRange) -> Self {
        Self {
            rule: T::rule(),
            body: kind.message(),
            range,
        }
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}
