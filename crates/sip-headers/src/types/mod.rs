pub mod headers;
pub mod require;
pub mod rseq;

pub use headers::{Header, HeaderAccess, HeaderList, HeaderName, HeaderValue, TypedHeader, TypedHeaderTrait};
pub use require::{Require, OPTION_TAG_100REL};
pub use rseq::RSeq;
