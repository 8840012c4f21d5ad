use crate::robots::agent_rules::AgentRules;
use serde::Serialize;
use std::collections::BTreeMap;

/// Agent key of the default section, and the home of the global `host`.
pub const WILDCARD_AGENT: &str = "*";

/// Case-folds an agent identifier one code point at a time, the same way
/// the scanner folds the text it reads.
pub(crate) fn agent_key(agent: &str) -> String {
    agent.chars().flat_map(char::to_lowercase).collect()
}

/// Rules keyed by lower-cased agent identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    agents: BTreeMap<String, AgentRules>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, agent: &str) -> Option<&AgentRules> {
        self.agents.get(agent)
    }

    pub fn contains_agent(&self, agent: &str) -> bool {
        self.agents.contains_key(agent)
    }

    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentRules)> {
        self.agents
            .iter()
            .map(|(agent, rules)| (agent.as_str(), rules))
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Returns the bucket for `agent`, creating an empty one if needed.
    pub(crate) fn agent_mut(&mut self, agent: &str) -> &mut AgentRules {
        self.agents.entry(agent.to_owned()).or_default()
    }

    pub(crate) fn dedup_lists(&mut self) {
        for rules in self.agents.values_mut() {
            rules.dedup_lists();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::Directive;

    #[test]
    fn agent_mut_creates_empty_bucket_once() {
        let mut table = RuleTable::new();
        table.agent_mut("google").push(Directive::Allow, "/a".to_owned());
        table.agent_mut("google");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("google").map(|rules| rules.allow().len()), Some(1));
    }

    #[test]
    fn agents_are_listed_in_key_order() {
        let mut table = RuleTable::new();
        table.agent_mut("yandex");
        table.agent_mut(WILDCARD_AGENT);
        table.agent_mut("google");
        assert_eq!(table.agents().collect::<Vec<_>>(), vec!["*", "google", "yandex"]);
    }
}
