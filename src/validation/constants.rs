//! Constants used throughout the validation system

/// Separates a rule name from its arguments, as in `max:5`
pub const RULE_ARGS_SEPARATOR: char = ':';
/// Separates the arguments of a rule, as in `between:2,4`
pub const ARGS_SEPARATOR: char = ',';

pub const REQUIRED: &str = "required";
pub const ALPHA_NUM: &str = "alphaNum";
pub const MAX: &str = "max";
pub const BETWEEN: &str = "between";
pub const EMAIL: &str = "email";
