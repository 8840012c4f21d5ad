use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Where a robots.txt body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Any URL on the site; the path is replaced with `/robots.txt`.
    Url(Url),
    Path(PathBuf),
}

impl SourceLocation {
    /// The robots.txt URL for a site URL.
    pub fn robots_txt_url(url: &Url) -> Url {
        let mut robots_txt_url = url.clone();
        robots_txt_url.set_path("/robots.txt");
        robots_txt_url.set_query(None);
        robots_txt_url.set_fragment(None);
        robots_txt_url
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{}", SourceLocation::robots_txt_url(url)),
            SourceLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_txt_url_replaces_path_query_and_fragment() {
        let url = Url::parse("https://example.com/some/page?q=1#top").unwrap();
        assert_eq!(
            SourceLocation::robots_txt_url(&url).as_str(),
            "https://example.com/robots.txt"
        );
    }

    #[test]
    fn displays_robots_txt_url() {
        let location = SourceLocation::Url(Url::parse("http://example.com:8080/").unwrap());
        assert_eq!(location.to_string(), "http://example.com:8080/robots.txt");
    }
}
