use encoding_rs::Encoding;

/// How directive values are cased when stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueCase {
    /// Every scanned character is lower-cased, values included.
    #[default]
    Lowercase,
    /// Values keep their original case. Agent keys are still lower-cased.
    Preserve,
}

#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    value_case: ValueCase,
    encoding: Option<&'static Encoding>,
}

impl ParserConfig {
    pub fn new(value_case: ValueCase) -> Self {
        Self {
            value_case,
            encoding: None,
        }
    }

    /// Decode raw bytes with `encoding` instead of detecting one.
    pub fn with_encoding(mut self, encoding: Option<&'static Encoding>) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    pub fn value_case(&self) -> ValueCase {
        self.value_case
    }
}
