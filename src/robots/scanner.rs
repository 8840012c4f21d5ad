use crate::robots::directive::Directive;
use crate::robots::parser_config::{ParserConfig, ValueCase};
use crate::robots::rule_table::{RuleTable, WILDCARD_AGENT, agent_key};
use crate::robots::scanner_state::ScannerState;
use tracing::{debug, trace, warn};

/// Character-driven state machine that folds robots.txt text into a `RuleTable`.
///
/// The scanner walks the input one code point at a time. Outside of
/// `clean-param` values the running word is kept trimmed, which drops every
/// whitespace character as it arrives; this is what lets `Disallow : /admin`
/// resolve to the `disallow` keyword without a dedicated whitespace state.
pub struct Scanner {
    chars: Vec<char>,
    index: usize,
    state: ScannerState,
    current_char: Option<char>,
    word: String,
    directive: Option<Directive>,
    agent: String,
    value_case: ValueCase,
    table: RuleTable,
}

impl Scanner {
    /// `content` is expected to end with a line terminator; end of input is
    /// treated as one regardless.
    pub fn new(content: &str, config: &ParserConfig) -> Self {
        Self {
            chars: content.chars().collect(),
            index: 0,
            state: ScannerState::ZeroPoint,
            current_char: None,
            word: String::new(),
            directive: None,
            agent: WILDCARD_AGENT.to_owned(),
            value_case: config.value_case(),
            table: RuleTable::new(),
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Zero-based code point index of the next character to consume.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Runs the scan to completion and deduplicates list values.
    pub fn scan(mut self) -> RuleTable {
        while !self.is_finished() {
            self.step();
        }
        if self.state == ScannerState::ReadValue {
            // Input without a trailing line break.
            self.assign_value(ScannerState::ZeroPoint);
        }
        self.table.dedup_lists();
        self.table
    }

    fn is_finished(&self) -> bool {
        self.index > self.chars.len()
    }

    fn step(&mut self) {
        match self.state {
            ScannerState::ZeroPoint => self.zero_point(),
            ScannerState::ReadDirective => self.read_directive(),
            ScannerState::SkipLine => self.skip_line(),
            ScannerState::ReadValue => self.read_value(),
        }
    }

    fn zero_point(&mut self) {
        if Directive::from_keyword(&self.word).is_some() {
            // The matched word is re-read as the directive name.
            self.transition(ScannerState::ReadDirective);
            return;
        }
        if is_line_break(self.current_char) {
            self.word.clear();
        }
        self.advance();
    }

    fn read_directive(&mut self) {
        let keyword = Directive::from_keyword(&self.word);
        self.advance();
        match self.current_char {
            Some(':') => match keyword {
                Some(directive) => {
                    self.directive = Some(directive);
                    self.word.clear();
                    self.transition(ScannerState::ReadValue);
                }
                None => {
                    trace!(word = %self.word, "unrecognized directive");
                    self.transition(ScannerState::SkipLine);
                }
            },
            Some('#') => self.transition(ScannerState::SkipLine),
            Some('\n' | '\r') | None => {
                self.word.clear();
                self.transition(ScannerState::ZeroPoint);
            }
            Some(_) => {}
        }
    }

    fn skip_line(&mut self) {
        self.skip();
        if is_line_break(self.current_char) || self.current_char.is_none() {
            self.word.clear();
            self.directive = None;
            self.transition(ScannerState::ZeroPoint);
        }
    }

    fn read_value(&mut self) {
        match self.current_char {
            Some('\n' | '\r') | None => self.assign_value(ScannerState::ZeroPoint),
            Some('#') => {
                self.word.pop();
                self.assign_value(ScannerState::SkipLine);
            }
            Some(_) => self.advance(),
        }
    }

    fn assign_value(&mut self, next: ScannerState) {
        let value = std::mem::take(&mut self.word);
        if let Some(directive) = self.directive.take() {
            self.apply(directive, value);
        }
        self.transition(next);
    }

    fn apply(&mut self, directive: Directive, value: String) {
        match directive {
            Directive::UserAgent => {
                let agent = agent_key(&value);
                self.table.agent_mut(&agent);
                debug!(agent = %agent, "entering agent section");
                self.agent = agent;
            }
            Directive::CrawlDelay => {
                if value.is_empty() {
                    return;
                }
                match value.parse::<f64>() {
                    Ok(delay) => {
                        debug!(agent = %self.agent, delay, "crawl-delay");
                        self.table.agent_mut(&self.agent).set_crawl_delay(delay);
                    }
                    Err(e) => warn!(agent = %self.agent, value = %value, error = %e, "skipping invalid crawl-delay"),
                }
            }
            Directive::Host => {
                if self.table.agent_mut(WILDCARD_AGENT).set_host_if_absent(value) {
                    debug!("host recorded");
                }
            }
            Directive::CleanParam => {
                let value = value.trim().to_owned();
                self.push(directive, value);
            }
            Directive::Allow | Directive::Disallow | Directive::Sitemap => {
                self.push(directive, value);
            }
        }
    }

    fn push(&mut self, directive: Directive, value: String) {
        if value.is_empty() {
            return;
        }
        debug!(agent = %self.agent, %directive, value = %value, "rule");
        self.table.agent_mut(&self.agent).push(directive, value);
    }

    /// Consumes the next character into the word buffer.
    fn advance(&mut self) {
        self.skip();
        if let Some(c) = self.current_char {
            self.append(c);
        }
    }

    /// Consumes the next character without buffering it.
    fn skip(&mut self) {
        self.current_char = self.chars.get(self.index).copied();
        self.index += 1;
    }

    fn append(&mut self, c: char) {
        // The word is kept trimmed, so blanks never survive an append.
        // Clean-param values are the exception and are trimmed on assignment.
        let keep_blanks = self.directive == Some(Directive::CleanParam);
        if !keep_blanks && is_blank(c) {
            return;
        }
        match self.value_case {
            ValueCase::Lowercase => self.word.extend(c.to_lowercase()),
            ValueCase::Preserve => self.word.push(c),
        }
    }

    fn transition(&mut self, next: ScannerState) {
        if self.state != next {
            trace!(from = ?self.state, to = ?next, index = self.index, "scanner transition");
        }
        self.state = next;
    }
}

fn is_line_break(c: Option<char>) -> bool {
    matches!(c, Some('\n' | '\r'))
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}
