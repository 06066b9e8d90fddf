//! Application Layer
//!
//! - **Ports**: Interfaces the use cases depend on, implemented by the
//!   Tradier adapter
//! - **Use Cases**: Multi-call workflows built on the ports

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
