//! Domain types - commits, release rules, match patterns and release ordering

pub mod commit;
pub mod pattern;
pub mod release_type;
pub mod rule;

pub use commit::Commit;
pub use pattern::Pattern;
pub use release_type::{default_release_types, ReleaseTypes};
pub use rule::ReleaseRule;
