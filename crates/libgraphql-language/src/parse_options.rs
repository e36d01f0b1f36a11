/// Controls what location information a parse attaches to nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Omit locations entirely; every node's `location` is `None`.
    pub no_location: bool,

    /// Keep byte offsets but do not attach the source handle to them.
    pub no_source: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_location(mut self, no_location: bool) -> Self {
        self.no_location = no_location;
        self
    }

    pub fn with_no_source(mut self, no_source: bool) -> Self {
        self.no_source = no_source;
        self
    }
}
