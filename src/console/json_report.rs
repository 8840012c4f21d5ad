use crate::robots::{RobotsTxt, RulesView};
use serde::Serialize;

/// JSON shape of one parsed source.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<&'a str>,
    rules: RulesView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_content: Option<&'a str>,
}

impl<'a> JsonReport<'a> {
    pub fn new(source: &'a str, robots: &'a RobotsTxt, agent: Option<&'a str>) -> Self {
        Self {
            source,
            agent,
            host: robots.host(),
            rules: robots.rules_for(agent),
            raw_content: None,
        }
    }

    /// Adds the normalized text alongside the rules.
    pub fn with_raw_content(mut self, robots: &'a RobotsTxt) -> Self {
        self.raw_content = Some(robots.raw_content());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_table_report() {
        let robots = RobotsTxt::parse("Host: example.com\nUser-agent: google\nDisallow: /a\nCrawl-delay: 2\n");
        let json = serde_json::to_value(JsonReport::new("robots.txt", &robots, None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "robots.txt",
                "host": "example.com",
                "rules": {
                    "*": { "host": "example.com" },
                    "google": { "disallow": ["/a"], "crawl-delay": 2.0 }
                }
            })
        );
    }

    #[test]
    fn single_agent_report() {
        let robots = RobotsTxt::parse("User-agent: *\nAllow: /\n");
        let json = serde_json::to_value(JsonReport::new("robots.txt", &robots, Some("bingbot"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "source": "robots.txt", "agent": "bingbot", "rules": {} })
        );
    }

    #[test]
    fn raw_content_is_included_on_request() {
        let robots = RobotsTxt::parse("User-agent: *
Disallow: /tmp");
        let json = serde_json::to_value(JsonReport::new("robots.txt", &robots, None).with_raw_content(&robots)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "robots.txt",
                "rules": { "*": { "disallow": ["/tmp"] } },
                "raw_content": robots.raw_content()
            })
        );
        assert!(robots.raw_content().ends_with('\n'));
    }
}
