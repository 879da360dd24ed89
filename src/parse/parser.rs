use winnow::Parser;

use crate::types::{DirectiveKind, RuleGroup};

use super::grammar::{self, Key};

/// Callback interface driven by [`scan`] as it walks a robots.txt body
/// line by line.
///
/// [`GroupAssembler`] is the implementation used by
/// [`Robots::parse()`](crate::Robots::parse); custom handlers can observe
/// the raw directive stream instead (for example to collect unknown
/// directives such as `crawl-delay`). Line numbers are 1-based; pattern
/// values arrive already normalized, sitemap values raw.
pub trait ParseHandler {
    fn start(&mut self) {}
    fn end(&mut self) {}
    fn user_agent(&mut self, line: usize, value: &str);
    fn allow(&mut self, line: usize, value: &str);
    fn disallow(&mut self, line: usize, value: &str);
    fn sitemap(&mut self, line: usize, value: &str);
    fn unknown(&mut self, _line: usize, _key: &str, _value: &str) {}
}

/// Walk `input` line by line, firing handler callbacks for each
/// recognized directive.
///
/// Leading/trailing whitespace is trimmed per line, a UTF-8 BOM is
/// stripped from the first line, and blank lines or lines with no
/// key/value separator are skipped. Scanning never fails; malformed lines
/// are simply not reported.
pub fn scan(input: &str, handler: &mut dyn ParseHandler) {
    handler.start();
    for (idx, raw) in input.lines().enumerate() {
        let line_num = idx + 1;
        let mut line = raw.trim();
        if line_num == 1 {
            line = line.trim_start_matches('\u{feff}').trim_start();
        }
        if line.is_empty() {
            continue;
        }
        let Ok((key, value)) = grammar::key_value.parse(line) else {
            continue;
        };
        match grammar::classify_key(key) {
            Key::UserAgent => handler.user_agent(line_num, value),
            Key::Allow => handler.allow(line_num, &grammar::normalize_pattern(value)),
            Key::Disallow => handler.disallow(line_num, &grammar::normalize_pattern(value)),
            Key::Sitemap => handler.sitemap(line_num, value),
            Key::Unknown => handler.unknown(line_num, key, &grammar::normalize_pattern(value)),
        }
    }
    handler.end();
}

/// The default [`ParseHandler`]: assembles the directive stream into
/// [`RuleGroup`]s.
///
/// Consecutive `user-agent` lines accumulate into one group; a
/// `user-agent` line arriving after any rule line closes the current
/// group and starts a new one. Rule lines seen before any agent
/// declaration are dropped. The in-progress group is flushed at
/// end-of-input.
#[derive(Debug, Default)]
pub struct GroupAssembler {
    current: RuleGroup,
    groups: Vec<RuleGroup>,
    seen_separator: bool,
}

impl GroupAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The assembled groups, in source order. Call after [`scan`] returns.
    #[must_use]
    pub fn into_groups(self) -> Vec<RuleGroup> {
        self.groups
    }

    fn push_rule(&mut self, kind: DirectiveKind, line: usize, value: &str) {
        if !self.current.has_agents() {
            return;
        }
        self.seen_separator = true;
        self.current.add_rule(kind, value, line);
    }
}

impl ParseHandler for GroupAssembler {
    fn start(&mut self) {
        self.current = RuleGroup::default();
        self.groups.clear();
        self.seen_separator = false;
    }

    fn end(&mut self) {
        self.groups.push(std::mem::take(&mut self.current));
        self.seen_separator = false;
    }

    fn user_agent(&mut self, _line: usize, value: &str) {
        if self.seen_separator {
            self.groups.push(std::mem::take(&mut self.current));
            self.seen_separator = false;
        }
        self.current.add_user_agent(value);
    }

    fn allow(&mut self, line: usize, value: &str) {
        self.push_rule(DirectiveKind::Allow, line, value);
    }

    fn disallow(&mut self, line: usize, value: &str) {
        self.push_rule(DirectiveKind::Disallow, line, value);
    }

    fn sitemap(&mut self, line: usize, value: &str) {
        self.push_rule(DirectiveKind::Sitemap, line, value);
    }
}
