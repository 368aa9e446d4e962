mod args;
mod parsers;

pub use args::Args;
pub use parsers::parse_positive_usize;
