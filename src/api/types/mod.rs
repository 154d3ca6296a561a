//! Request and response types for the wallet service API,
//! organized by category.

pub mod poe;
pub mod response;
pub mod transaction;
pub mod txlog;
pub mod wallet;

// Re-export all types for convenience
pub use poe::*;
pub use response::*;
pub use transaction::*;
pub use txlog::*;
pub use wallet::*;
