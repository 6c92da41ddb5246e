pub mod error;
pub mod time_value;
pub mod types;
pub mod wealth;

pub use error::RetirementError;
pub use types::*;

/// Standard result type for all retirement-analytics operations
pub type RetirementResult<T> = Result<T, RetirementError>;
