pub mod aggregate;
pub mod dto;

pub use aggregate::build_overview;
pub use dto::*;
