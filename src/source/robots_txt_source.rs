use crate::robots::{ParserConfig, RobotsTxt, decode, encoding_for_label};
use crate::source::loader_config::LoaderConfig;
use crate::source::source_error::SourceError;
use crate::source::source_location::SourceLocation;
use encoding_rs::Encoding;
use reqwest::StatusCode;
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

/// Raw robots.txt text, decoded to UTF-8 but not yet scanned.
#[derive(Clone)]
pub struct RobotsTxtSource {
    origin: String,
    content: String,
}

impl RobotsTxtSource {
    pub fn new(origin: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            content: content.into(),
        }
    }

    pub async fn load(location: &SourceLocation, config: &LoaderConfig) -> Result<Self, SourceError> {
        match location {
            SourceLocation::Url(url) => {
                Self::load_from_url(url, config.user_agent(), config.parser_config().encoding()).await
            }
            SourceLocation::Path(path) => {
                Self::load_from_path(path, config.parser_config().encoding()).await
            }
        }
    }

    /// Fetches `/robots.txt` from the site of `url`. A missing file is an empty one.
    ///
    /// The body is decoded with `encoding` when given, else with the charset
    /// of the response, else with a detected encoding.
    pub async fn load_from_url(
        url: &Url,
        user_agent: &str,
        encoding: Option<&'static Encoding>,
    ) -> Result<Self, SourceError> {
        let robots_txt_url = SourceLocation::robots_txt_url(url);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        let robots_response = client.get(robots_txt_url.clone()).send().await?;
        if !robots_response.status().is_success() {
            if robots_response.status() == StatusCode::NOT_FOUND {
                debug!(url = %robots_txt_url, "no robots.txt");
                return Ok(Self::new(robots_txt_url.as_str(), String::new()));
            }
            return Err(SourceError::HttpStatus(robots_response.status().as_u16()));
        }

        let mut response_charset = None;
        if let Some(content_type) = robots_response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            match content_type.parse::<mime::Mime>() {
                Ok(content_type) => {
                    if content_type.type_() != mime::TEXT {
                        warn!(url = %robots_txt_url, %content_type, "robots.txt is not text, parsing anyway");
                    }
                    response_charset = content_type
                        .get_param(mime::CHARSET)
                        .and_then(|charset| encoding_for_label(charset.as_str()));
                }
                Err(e) => warn!(url = %robots_txt_url, error = %e, "unreadable content type"),
            }
        }

        let bytes = robots_response.bytes().await?;
        let content = decode(&bytes, encoding.or(response_charset));
        Ok(Self::new(robots_txt_url.as_str(), content))
    }

    /// Reads a local file, decoded with `encoding` or a detected encoding.
    pub async fn load_from_path(path: &Path, encoding: Option<&'static Encoding>) -> Result<Self, SourceError> {
        let bytes = tokio::fs::read(path).await?;
        let content = decode(&bytes, encoding);
        Ok(Self::new(path.display().to_string(), content))
    }

    /// URL or path the text was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn parse(&self, config: &ParserConfig) -> RobotsTxt {
        RobotsTxt::parse_with(&self.content, config)
    }
}
