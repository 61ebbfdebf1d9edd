//! Session state stores
//!
//! Each module owns one sub-tree of the merged [`SessionState`] plus its
//! mutator operations. The application holds the merged value in a signal and
//! passes that handle down explicitly; a slice only ever writes its own
//! sub-tree, so subscribers observe either the old or the fully merged value.

pub mod history;
pub mod prompts;
pub mod session;
pub mod snapshot;

pub use history::*;
pub use prompts::*;
pub use session::*;
pub use snapshot::*;
