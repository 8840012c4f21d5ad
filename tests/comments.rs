use pretty_assertions::assert_eq;
use rusty_robots::robots::RobotsTxt;

#[test]
fn commented_rules_are_removed() {
    for content in [
        "\n\tUser-agent: *\n\t#Disallow: /tech\n",
        "\n\tUser-agent: *\n\tDisallow: #/tech\n",
        "\n\tUser-agent: *\n\tDisal # low: /tech\n",
        "\n\tUser-agent: *\n\tDisallow#: /tech # ds\n",
    ] {
        let robots = RobotsTxt::parse(content);
        assert!(robots.agent_rules("*").is_empty(), "{content:?}");
    }
}

#[test]
fn trailing_comment_is_cut_from_value() {
    let robots = RobotsTxt::parse("User-agent: *\n\t\t\t\t\tDisallow: /tech #comment");
    assert_eq!(robots.agent_rules("*").disallow(), ["/tech"]);
}

#[test]
fn comments_do_not_disturb_neighbours() {
    let robots = RobotsTxt::parse(
        "# robots.txt for example.com\nUser-agent: * # everyone\nDisallow: /a # first\n# Disallow: /hidden\nDisallow: /b\n",
    );
    assert_eq!(robots.agent_rules("*").disallow(), ["/a", "/b"]);
    assert_eq!(robots.rule_table().agents().collect::<Vec<_>>(), vec!["*"]);
}

#[test]
fn comment_only_document() {
    let robots = RobotsTxt::parse("# just a comment\n#another\n   # indented\n");
    assert!(robots.rule_table().is_empty());
}
