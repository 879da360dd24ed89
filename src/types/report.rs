use std::fmt;

use super::rule::DirectiveKind;

/// Which tier of the match hierarchy produced the winning directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// The group matched only via a `*` user-agent declaration.
    Global,
    /// The requester's agent name was explicitly listed in the group.
    Specific,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Global => f.write_str("global"),
            MatchTier::Specific => f.write_str("specific"),
        }
    }
}

/// The directive that decided a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningMatch {
    pub kind: DirectiveKind,
    /// 1-based source line of the winning directive.
    pub line: usize,
    /// The directive's match priority (its pattern length).
    pub priority: i32,
    pub tier: MatchTier,
}

/// Detailed query report returned by [`Robots::query()`](super::Robots::query).
///
/// Carries the same boolean decision as
/// [`Robots::allowed_by_robots()`](super::Robots::allowed_by_robots), plus
/// the directive that decided it. `winner()` is `None` when the path was
/// allowed by default, with no directive of non-trivial priority matching
/// at either tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct QueryReport {
    allowed: bool,
    winner: Option<WinningMatch>,
}

impl QueryReport {
    pub(crate) fn decided(allowed: bool, winner: WinningMatch) -> Self {
        Self {
            allowed,
            winner: Some(winner),
        }
    }

    pub(crate) fn default_allow() -> Self {
        Self {
            allowed: true,
            winner: None,
        }
    }

    /// The query decision, same as [`Robots::allowed_by_robots()`](super::Robots::allowed_by_robots).
    #[must_use]
    pub fn allowed(&self) -> bool {
        self.allowed
    }

    /// The directive that decided the query, if any matched.
    #[must_use]
    pub fn winner(&self) -> Option<&WinningMatch> {
        self.winner.as_ref()
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decision = if self.allowed { "allowed" } else { "denied" };
        match &self.winner {
            Some(w) => write!(
                f,
                "{decision} by {} rule at line {} ({} tier, priority {})",
                w.kind, w.line, w.tier, w.priority
            ),
            None => write!(f, "{decision} by default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accessors() {
        let report = QueryReport::decided(
            false,
            WinningMatch {
                kind: DirectiveKind::Disallow,
                line: 4,
                priority: 1,
                tier: MatchTier::Specific,
            },
        );
        assert!(!report.allowed());
        let winner = report.winner().unwrap();
        assert_eq!(winner.kind, DirectiveKind::Disallow);
        assert_eq!(winner.line, 4);
        assert_eq!(winner.priority, 1);
        assert_eq!(winner.tier, MatchTier::Specific);
    }

    #[test]
    fn report_display_with_winner() {
        let report = QueryReport::decided(
            true,
            WinningMatch {
                kind: DirectiveKind::Allow,
                line: 5,
                priority: 3,
                tier: MatchTier::Specific,
            },
        );
        let s = report.to_string();
        assert!(s.contains("allowed by allow rule at line 5"));
        assert!(s.contains("specific tier"));
    }

    #[test]
    fn report_display_default_allow() {
        let report = QueryReport::default_allow();
        assert!(report.allowed());
        assert_eq!(report.to_string(), "allowed by default");
    }
}
