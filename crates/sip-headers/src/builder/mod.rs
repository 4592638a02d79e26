//! Builder extensions for attaching typed headers to an outgoing message.
//!
//! Each header gets an extension trait that is implemented for every
//! [`HeaderSetter`], so the methods chain on anything that owns headers.

pub mod headers;

pub use headers::{HeaderSetter, RSeqBuilderExt, RequireBuilderExt};
