use std::convert::TryFrom;
use tracing::warn;

use crate::types::headers::{HeaderList, TypedHeader, TypedHeaderTrait};

/// Trait for setting headers on builders
pub trait HeaderSetter {
    /// Set a header, replacing any header of the same name
    fn set_header<H: TypedHeaderTrait + 'static>(self, header: H) -> Self;
}

impl HeaderSetter for HeaderList {
    fn set_header<H: TypedHeaderTrait + 'static>(mut self, header: H) -> Self {
        let header = header.to_header();
        let name = header.name.clone();
        match TypedHeader::try_from(header) {
            Ok(typed_header) => self.set(typed_header),
            Err(e) => warn!(name = %name, error = %e, "dropping header that failed to convert"),
        }
        self
    }
}

pub mod require;
pub mod rseq;

pub use require::RequireBuilderExt;
pub use rseq::RSeqBuilderExt;
