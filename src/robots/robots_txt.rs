use crate::robots::agent_rules::AgentRules;
use crate::robots::charset;
use crate::robots::parser_config::ParserConfig;
use crate::robots::rule_table::{RuleTable, WILDCARD_AGENT, agent_key};
use crate::robots::scanner::Scanner;
use serde::Serialize;
use std::collections::HashSet;

static EMPTY_RULES: AgentRules = AgentRules::new();

/// Result of `RobotsTxt::rules_for`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RulesView<'a> {
    All(&'a RuleTable),
    Agent(&'a AgentRules),
}

/// A parsed robots.txt document.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotsTxt {
    content: String,
    rules: RuleTable,
}

impl RobotsTxt {
    pub fn parse(content: &str) -> Self {
        Self::parse_with(content, &ParserConfig::default())
    }

    pub fn parse_with(content: &str, config: &ParserConfig) -> Self {
        let content = normalize(content);
        let rules = Scanner::new(&content, config).scan();
        Self { content, rules }
    }

    /// Decodes `bytes` with the configured encoding, or a detected one, then parses.
    pub fn from_bytes(bytes: &[u8], config: &ParserConfig) -> Self {
        Self::parse_with(&charset::decode(bytes, config.encoding()), config)
    }

    /// The whole table when `agent` is `None`, otherwise that agent's rules.
    pub fn rules_for(&self, agent: Option<&str>) -> RulesView<'_> {
        match agent {
            None => RulesView::All(&self.rules),
            Some(agent) => RulesView::Agent(self.agent_rules(agent)),
        }
    }

    /// Rules stored for `agent`, or an empty set when the agent never appeared.
    pub fn agent_rules(&self, agent: &str) -> &AgentRules {
        self.rules.get(&agent_key(agent)).unwrap_or(&EMPTY_RULES)
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rules
    }

    /// The first `host` value in the document.
    pub fn host(&self) -> Option<&str> {
        self.rules.get(WILDCARD_AGENT).and_then(AgentRules::host)
    }

    /// Sitemaps from every section in agent key order, without repeats.
    pub fn sitemaps(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .flat_map(|(_, rules)| rules.sitemap())
            .map(String::as_str)
            .filter(|sitemap| seen.insert(*sitemap))
            .collect()
    }

    /// The text exactly as it was fed to the scanner.
    pub fn raw_content(&self) -> &str {
        &self.content
    }
}

fn normalize(content: &str) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut normalized = String::with_capacity(content.len() + 1);
    normalized.push_str(content);
    normalized.push('\n');
    normalized
}
