use crate::GraphQLSource;
use crate::SourceLocation;

/// The half-open byte range `[start, end)` a node was parsed from.
///
/// Offsets index into the UTF-8 body of the source. `source` is populated
/// unless the parse was configured with `no_source`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub start: u32,
    pub end: u32,
    pub source: Option<GraphQLSource>,
}

impl Location {
    pub fn new(start: u32, end: u32, source: Option<GraphQLSource>) -> Self {
        Self { start, end, source }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The text this location covers, when the source was retained.
    pub fn source_text(&self) -> Option<&str> {
        let source = self.source.as_ref()?;
        source.body().get(self.start as usize..self.end as usize)
    }

    /// 1-based line and column of `start`, when the source was retained.
    pub fn start_location(&self) -> Option<SourceLocation> {
        let source = self.source.as_ref()?;
        Some(SourceLocation::from_offset(source.body(), self.start))
    }
}
