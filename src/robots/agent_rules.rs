use crate::robots::directive::Directive;
use crate::robots::directive_value::DirectiveValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;

/// The directives collected for one agent key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentRules {
    allow: Vec<String>,
    disallow: Vec<String>,
    sitemap: Vec<String>,
    clean_param: Vec<String>,
    crawl_delay: Option<f64>,
    host: Option<String>,
}

impl AgentRules {
    pub const fn new() -> Self {
        Self {
            allow: Vec::new(),
            disallow: Vec::new(),
            sitemap: Vec::new(),
            clean_param: Vec::new(),
            crawl_delay: None,
            host: None,
        }
    }

    pub fn allow(&self) -> &[String] {
        &self.allow
    }

    pub fn disallow(&self) -> &[String] {
        &self.disallow
    }

    pub fn sitemap(&self) -> &[String] {
        &self.sitemap
    }

    pub fn clean_param(&self) -> &[String] {
        &self.clean_param
    }

    pub fn crawl_delay(&self) -> Option<f64> {
        self.crawl_delay
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Looks up a directive by name. Empty lists and unset scalars are
    /// reported as absent; `user-agent` is never stored.
    pub fn get(&self, directive: Directive) -> Option<DirectiveValue<'_>> {
        match directive {
            Directive::Allow => non_empty(&self.allow),
            Directive::Disallow => non_empty(&self.disallow),
            Directive::Sitemap => non_empty(&self.sitemap),
            Directive::CleanParam => non_empty(&self.clean_param),
            Directive::CrawlDelay => self.crawl_delay.map(DirectiveValue::Delay),
            Directive::Host => self.host.as_deref().map(DirectiveValue::Host),
            Directive::UserAgent => None,
        }
    }

    /// Stored directives in keyword order.
    pub fn iter(&self) -> impl Iterator<Item = (Directive, DirectiveValue<'_>)> {
        Directive::ALL
            .into_iter()
            .filter_map(move |directive| self.get(directive).map(|value| (directive, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Appends to a list directive. Empty values and scalar directives are ignored.
    pub(crate) fn push(&mut self, directive: Directive, value: String) -> bool {
        if value.is_empty() {
            return false;
        }
        match self.list_mut(directive) {
            Some(values) => {
                values.push(value);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_crawl_delay(&mut self, delay: f64) {
        self.crawl_delay = Some(delay);
    }

    /// Stores `host` unless a value is already present.
    pub(crate) fn set_host_if_absent(&mut self, host: String) -> bool {
        if self.host.is_some() || host.is_empty() {
            return false;
        }
        self.host = Some(host);
        true
    }

    /// Removes repeated list entries, keeping the first occurrence of each.
    pub(crate) fn dedup_lists(&mut self) {
        dedup_in_order(&mut self.allow);
        dedup_in_order(&mut self.disallow);
        dedup_in_order(&mut self.sitemap);
        dedup_in_order(&mut self.clean_param);
    }

    fn list_mut(&mut self, directive: Directive) -> Option<&mut Vec<String>> {
        match directive {
            Directive::Allow => Some(&mut self.allow),
            Directive::Disallow => Some(&mut self.disallow),
            Directive::Sitemap => Some(&mut self.sitemap),
            Directive::CleanParam => Some(&mut self.clean_param),
            Directive::Host | Directive::UserAgent | Directive::CrawlDelay => None,
        }
    }
}

impl Serialize for AgentRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (directive, value) in self.iter() {
            map.serialize_entry(directive.keyword(), &value)?;
        }
        map.end()
    }
}

fn non_empty(values: &[String]) -> Option<DirectiveValue<'_>> {
    if values.is_empty() {
        None
    } else {
        Some(DirectiveValue::List(values))
    }
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(values.len());
    values.retain(|value| seen.insert(value.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_values_are_not_appended() {
        let mut rules = AgentRules::new();
        assert!(!rules.push(Directive::Disallow, String::new()));
        assert!(rules.push(Directive::Disallow, "/foo".to_owned()));
        assert_eq!(rules.disallow(), ["/foo".to_owned()]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let mut rules = AgentRules::new();
        for value in ["/b", "/a", "/b", "/c", "/a"] {
            rules.push(Directive::Allow, value.to_owned());
        }
        rules.dedup_lists();
        assert_eq!(rules.allow(), ["/b", "/a", "/c"].map(String::from));
    }

    #[test]
    fn host_is_first_write_wins() {
        let mut rules = AgentRules::new();
        assert!(rules.set_host_if_absent("example.com".to_owned()));
        assert!(!rules.set_host_if_absent("www.example.com".to_owned()));
        assert_eq!(rules.host(), Some("example.com"));
    }

    #[test]
    fn scalar_directives_reject_push() {
        let mut rules = AgentRules::new();
        assert!(!rules.push(Directive::Host, "example.com".to_owned()));
        assert!(!rules.push(Directive::UserAgent, "google".to_owned()));
        assert!(rules.is_empty());
    }

    #[test]
    fn get_reports_unset_directives_as_absent() {
        let mut rules = AgentRules::new();
        rules.set_crawl_delay(2.5);
        assert_eq!(rules.get(Directive::CrawlDelay), Some(DirectiveValue::Delay(2.5)));
        assert_eq!(rules.get(Directive::Disallow), None);
        assert_eq!(rules.get(Directive::UserAgent), None);
    }

    #[test]
    fn serializes_as_keyword_map() {
        let mut rules = AgentRules::new();
        rules.push(Directive::Disallow, "/admin".to_owned());
        rules.set_crawl_delay(1.5);
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"{"disallow":["/admin"],"crawl-delay":1.5}"#);
    }
}
