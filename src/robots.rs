mod agent_rules;
mod charset;
mod directive;
mod directive_value;
mod parser_config;
mod robots_txt;
mod rule_table;
mod scanner;
mod scanner_state;

pub use agent_rules::AgentRules;
pub use charset::{decode, detect_encoding, encoding_for_label};
pub use directive::Directive;
pub use directive_value::DirectiveValue;
pub use parser_config::{ParserConfig, ValueCase};
pub use robots_txt::{RobotsTxt, RulesView};
pub use rule_table::{RuleTable, WILDCARD_AGENT};
pub use scanner::Scanner;
pub use scanner_state::ScannerState;
