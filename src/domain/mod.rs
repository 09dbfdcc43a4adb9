//! Domain logic - pure versioning rules independent of git operations

pub mod module;
pub mod tag;
pub mod version;

pub use module::module_major;
pub use tag::TagPrefix;
pub use version::{BumpKind, Version};
