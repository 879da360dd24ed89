use super::rule::{DirectiveKind, Rule};

/// A maximal run of directives sharing the same user-agent declarations.
///
/// A group may be global (declared for `*`), name specific agents, or
/// both; both match modes then apply independently during resolution. A
/// group that is neither is legal but is never selected for a query.
/// Groups are immutable once parsing completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleGroup {
    pub global_agent: bool,
    pub specific_agents: Vec<String>,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    /// Record a `user-agent:` value on this group.
    ///
    /// A value starting with `*` (alone or followed by whitespace) marks
    /// the group global. Any other value is truncated at the first
    /// non-letter character past the start, reducing free-form tokens
    /// like `FooBot/1.2` to the product name.
    pub(crate) fn add_user_agent(&mut self, agent: &str) {
        let mut chars = agent.chars();
        if chars.next() == Some('*') && chars.next().is_none_or(char::is_whitespace) {
            self.global_agent = true;
            return;
        }
        let token = match agent.char_indices().find(|(_, c)| !c.is_alphabetic()) {
            Some((idx, _)) if idx > 0 => &agent[..idx],
            _ => agent,
        };
        self.specific_agents.push(token.to_owned());
    }

    pub(crate) fn add_rule(&mut self, kind: DirectiveKind, value: impl Into<String>, line: usize) {
        self.rules.push(Rule::new(kind, value, line));
    }

    /// Whether any of the requested agent names exactly equals one of
    /// this group's specific agents (case-sensitive).
    pub(crate) fn matches_agents(&self, agents: &[&str]) -> bool {
        agents
            .iter()
            .any(|ua| self.specific_agents.iter().any(|agent| agent == ua))
    }

    /// Whether any user-agent line (global or specific) has been seen.
    pub(crate) fn has_agents(&self) -> bool {
        self.global_agent || !self.specific_agents.is_empty()
    }
}
