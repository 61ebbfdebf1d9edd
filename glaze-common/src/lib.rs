//! glaze-common - Shared client-side data model for glaze
//!
//! Parameter records, server-advertised ranges, generation responses, and the
//! extras catalog shared by the state layer and the front ends.

pub mod extras;
pub mod params;
pub mod ranges;
pub mod response;

pub use extras::*;
pub use params::*;
pub use ranges::*;
pub use response::*;
