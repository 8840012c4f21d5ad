use crate::robots::{AgentRules, DirectiveValue, RobotsTxt};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::Write;

/// Writes parsed rules as indented, optionally colored, text.
pub struct RulesPrinter<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> RulesPrinter<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints every agent section, or only `agent` when given.
    pub fn print(&mut self, source: &str, robots: &RobotsTxt, agent: Option<&str>) -> anyhow::Result<()> {
        self.heading(&format!("# {}", source), Color::Cyan)?;
        if let Some(host) = robots.host() {
            queue!(self.out, Print(format!("host: {}\n", host)))?;
        }

        match agent {
            Some(agent) => self.print_section(agent, robots.agent_rules(agent))?,
            None => {
                if robots.rule_table().is_empty() {
                    queue!(self.out, Print("(no rules)\n"))?;
                }
                for (agent, rules) in robots.rule_table().iter() {
                    self.print_section(agent, rules)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Prints the normalized text the scanner consumed.
    pub fn print_raw(&mut self, source: &str, robots: &RobotsTxt) -> anyhow::Result<()> {
        self.heading(&format!("# {}", source), Color::Cyan)?;
        queue!(self.out, Print(robots.raw_content()))?;
        self.out.flush()?;
        Ok(())
    }

    fn print_section(&mut self, agent: &str, rules: &AgentRules) -> anyhow::Result<()> {
        self.heading(&format!("[{}]", agent), Color::Yellow)?;
        if rules.is_empty() {
            queue!(self.out, Print("  (no rules)\n"))?;
        }
        for (directive, value) in rules.iter() {
            match value {
                DirectiveValue::List(values) => {
                    for value in values {
                        queue!(self.out, Print(format!("  {}: {}\n", directive, value)))?;
                    }
                }
                DirectiveValue::Delay(delay) => {
                    queue!(self.out, Print(format!("  {}: {}\n", directive, delay)))?;
                }
                DirectiveValue::Host(host) => {
                    queue!(self.out, Print(format!("  {}: {}\n", directive, host)))?;
                }
            }
        }
        Ok(())
    }

    fn heading(&mut self, text: &str, color: Color) -> anyhow::Result<()> {
        if self.styled {
            queue!(
                self.out,
                SetForegroundColor(color),
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("\n"),
            )?;
        } else {
            queue!(self.out, Print(text), Print("\n"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(content: &str, agent: Option<&str>) -> String {
        let robots = RobotsTxt::parse(content);
        let mut printer = RulesPrinter::new(Vec::new(), false);
        printer.print("robots.txt", &robots, agent).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn prints_all_sections() {
        let text = render(
            "Host: example.com\nUser-agent: *\nDisallow: /a\nDisallow: /b\nUser-agent: google\nCrawl-delay: 1.5\n",
            None,
        );
        assert_eq!(
            text,
            "# robots.txt\nhost: example.com\n[*]\n  disallow: /a\n  disallow: /b\n  host: example.com\n[google]\n  crawl-delay: 1.5\n"
        );
    }

    #[test]
    fn prints_empty_bucket_for_unknown_agent() {
        let text = render("User-agent: *\nDisallow: /a\n", Some("bingbot"));
        assert_eq!(text, "# robots.txt\n[bingbot]\n  (no rules)\n");
    }

    #[test]
    fn prints_no_rules_for_empty_document() {
        let text = render("# nothing here\n", None);
        assert_eq!(text, "# robots.txt\n(no rules)\n");
    }

    #[test]
    fn styled_output_wraps_headings() {
        let robots = RobotsTxt::parse("Allow: /\n");
        let mut printer = RulesPrinter::new(Vec::new(), true);
        printer.print("robots.txt", &robots, None).unwrap();
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("  allow: /\n"));
    }
}
