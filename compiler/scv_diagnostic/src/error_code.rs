//! Error codes for all compiler diagnostics.

mod codes;


pub use codes::ErrorCode;
