// Dashboard data models
// Snapshot types plus the read-only views the filter works against

pub mod stage;
pub mod pipeline;
pub mod view;

pub use stage::*;
pub use pipeline::*;
pub use view::*;
