//! glaze-ui - Session state and form components for the glaze front end
//!
//! Contains the per-tab state slices merged into one [`stores::SessionState`],
//! snapshot persistence, and the pure view components shared by the web front
//! end and the design tool.

pub mod components;
pub mod stores;

pub use components::*;
pub use stores::*;
