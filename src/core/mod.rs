pub mod formatter;
pub mod template;

pub use crate::domain::model::{DateSnapshot, DateStyle};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
