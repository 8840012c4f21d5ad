mod json_report;
mod rules_printer;

pub use json_report::JsonReport;
pub use rules_printer::RulesPrinter;
