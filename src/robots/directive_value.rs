use serde::Serialize;

/// A stored directive value, borrowed from its `AgentRules`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue<'a> {
    /// `allow`, `disallow`, `sitemap` and `clean-param`.
    List(&'a [String]),
    /// `crawl-delay`, in seconds.
    Delay(f64),
    /// `host`, only ever stored under the wildcard agent.
    Host(&'a str),
}
