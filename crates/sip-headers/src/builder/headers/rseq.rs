use tracing::warn;

use crate::types::rseq::RSeq;
use super::HeaderSetter;

/// RSeq header builder
///
/// Builder methods for the RSeq header of reliable provisional responses
/// ([RFC 3262](https://datatracker.ietf.org/doc/html/rfc3262)).
///
/// - RSeq is only sent in 1xx responses other than 100
/// - it travels together with `Require: 100rel`
/// - the UAC echoes it in the RAck header of its PRACK
/// - each later reliable provisional response of the same transaction carries
///   the previous value plus one
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
/// use rvoip_sip_headers::builder::headers::{RSeqBuilderExt, RequireBuilderExt};
///
/// // 183 Session Progress, sent reliably
/// let progress = HeaderList::new()
///     .require_100rel()
///     .rseq(1);
///
/// // 180 Ringing for the same INVITE
/// let previous = progress.rseq_header().unwrap().sequence_number();
/// let ringing = HeaderList::new()
///     .require_100rel()
///     .rseq_next(previous);
///
/// assert_eq!(ringing.rseq_header(), Some(&RSeq::new(2)));
/// ```
pub trait RSeqBuilderExt {
    /// Add an RSeq header with a sequence number
    fn rseq(self, seq: u32) -> Self;

    /// Add an RSeq header one greater than `previous_seq`.
    ///
    /// RSeq numbers must not wrap. When `previous_seq` is already the largest
    /// value no header is added and a warning is logged.
    fn rseq_next(self, previous_seq: u32) -> Self;

    /// Add an RSeq header with a random initial value below 2**31 - 1
    fn rseq_random(self) -> Self;
}

impl<T> RSeqBuilderExt for T
where
    T: HeaderSetter,
{
    fn rseq(self, seq: u32) -> Self {
        self.set_header(RSeq::new(seq))
    }

    fn rseq_next(self, previous_seq: u32) -> Self {
        match RSeq::new(previous_seq).next() {
            Some(rseq) => self.set_header(rseq),
            None => {
                warn!(previous_seq, "RSeq numbering space exhausted, not adding RSeq");
                self
            }
        }
    }

    fn rseq_random(self) -> Self {
        self.set_header(RSeq::random_initial())
    }
}
