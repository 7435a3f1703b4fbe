use crate::registry::Rule;

/// A rule violation: one struct per [`Rule`], carrying the values
/// interpolated into its message.
pub trait Violation {
    /// The rule this violation belongs to.
    fn rule() -> Rule;

    /// The message body to display to the user.
    fn message(&self) -> String;
}
