use crate::types::headers::HeaderAccess;
use crate::types::require::{Require, OPTION_TAG_100REL};
use super::HeaderSetter;

/// Builder methods for the Require header.
///
/// Tags are merged into an existing Require header instead of replacing it.
pub trait RequireBuilderExt {
    /// Add an option tag to the Require header
    fn require_tag(self, tag: &str) -> Self;

    /// Mark the message as a reliable provisional response (`Require: 100rel`)
    fn require_100rel(self) -> Self;
}

impl<T> RequireBuilderExt for T
where
    T: HeaderSetter + HeaderAccess,
{
    fn require_tag(self, tag: &str) -> Self {
        let mut require = self
            .typed_header::<Require>()
            .cloned()
            .unwrap_or_else(|| Require::new(Vec::new()));
        require.add_tag(tag);
        self.set_header(require)
    }

    fn require_100rel(self) -> Self {
        self.require_tag(OPTION_TAG_100REL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::headers::RSeqBuilderExt;
    use crate::types::headers::HeaderList;

    #[test]
    fn test_require_tags_merge() {
        let headers = HeaderList::new()
            .require_100rel()
            .require_tag("precondition")
            .require_100rel();

        let require = headers.typed_header::<Require>().unwrap();
        assert_eq!(require.option_tags(), ["100rel", "precondition"]);
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_reliable_provisional_headers() {
        let headers = HeaderList::new().require_100rel().rseq(988789);
        assert_eq!(headers.to_wire_format(), "Require: 100rel\r\nRSeq: 988789\r\n");
    }
}
