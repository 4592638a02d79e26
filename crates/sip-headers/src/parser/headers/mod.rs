// Value grammars for the typed headers

pub mod require;
pub mod rseq;

pub use require::parse_require;
pub use rseq::{parse_rseq, parse_rseq_header};
