//! CLI command implementations.

mod input;
pub(crate) mod parse;
pub(crate) mod style;

pub(crate) use parse::ParseArgs;
pub(crate) use style::StyleArgs;
