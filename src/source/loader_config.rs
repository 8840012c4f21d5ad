use crate::robots::ParserConfig;

pub const DEFAULT_USER_AGENT: &str = "rusty-robots";

#[derive(Clone)]
pub struct LoaderConfig {
    user_agent: String,
    parser_config: ParserConfig,
}

impl LoaderConfig {
    pub fn new(user_agent: String, parser_config: ParserConfig) -> Self {
        Self {
            user_agent,
            parser_config,
        }
    }

    /// Sent as the `User-Agent` header when fetching over HTTP.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn parser_config(&self) -> &ParserConfig {
        &self.parser_config
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT.to_owned(), ParserConfig::default())
    }
}
