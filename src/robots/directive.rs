use std::fmt;

/// A robots.txt instruction keyword recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Allow,
    Disallow,
    Host,
    Sitemap,
    UserAgent,
    CrawlDelay,
    CleanParam,
}

impl Directive {
    pub const ALL: [Directive; 7] = [
        Directive::Allow,
        Directive::Disallow,
        Directive::Host,
        Directive::Sitemap,
        Directive::UserAgent,
        Directive::CrawlDelay,
        Directive::CleanParam,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Allow => "allow",
            Directive::Disallow => "disallow",
            Directive::Host => "host",
            Directive::Sitemap => "sitemap",
            Directive::UserAgent => "user-agent",
            Directive::CrawlDelay => "crawl-delay",
            Directive::CleanParam => "clean-param",
        }
    }

    /// Matches `word` against the keywords, ignoring ASCII case.
    /// The whole word must match; `allowed` is not `allow`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|directive| directive.keyword().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_regardless_of_case() {
        assert_eq!(Directive::from_keyword("User-Agent"), Some(Directive::UserAgent));
        assert_eq!(Directive::from_keyword("DISALLOW"), Some(Directive::Disallow));
        assert_eq!(Directive::from_keyword("crawl-delay"), Some(Directive::CrawlDelay));
    }

    #[test]
    fn keyword_prefixes_are_not_directives() {
        assert_eq!(Directive::from_keyword("allowed"), None);
        assert_eq!(Directive::from_keyword("hostname"), None);
        assert_eq!(Directive::from_keyword(""), None);
    }

    #[test]
    fn every_keyword_round_trips() {
        for directive in Directive::ALL {
            assert_eq!(Directive::from_keyword(directive.keyword()), Some(directive));
        }
    }
}
