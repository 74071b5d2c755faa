//! Gantry Git - Git operations for release preparation

mod branch;
mod commit;
mod remote;
mod repository;

pub use remote::{push_branch_with_upstream, push_tag};
pub use repository::GitRepo;
