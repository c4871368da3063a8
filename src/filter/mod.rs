pub mod status;
pub mod evaluator;

pub use status::{StatusFilter, UnknownStatusFilter};
pub use evaluator::{DashboardFilter, FilterConfig};
