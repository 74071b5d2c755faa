//! CLI commands

mod prep;
mod release;
mod tag;

pub use prep::PrepCommand;
pub use release::ReleaseCommand;
pub use tag::TagCommand;
