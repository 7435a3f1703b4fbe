pub(crate) mod duplicate_expression;
pub(crate) mod nesting;
pub(crate) mod unreachable_condition;
