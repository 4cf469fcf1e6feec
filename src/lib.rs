#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod interval_gate;
pub use interval_gate::*;

mod once_gate;
pub use once_gate::*;

mod registry;
pub use registry::*;

mod clock;
pub use clock::unix_millis;

mod macros;

#[doc(hidden)]
pub mod __private {
    //! Implementation detail of the call-site macros. Not part of the public
    //! API; do not use directly.
    pub use tracing;
}

#[cfg(test)]
mod tests;
