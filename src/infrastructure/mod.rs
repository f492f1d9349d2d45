//! Infrastructure Layer
//!
//! Cross-cutting concerns shared by the serving surface.

pub mod shutdown;

pub use shutdown::shutdown_signal;
