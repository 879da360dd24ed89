use crate::matcher::{MatchStrategy, NO_MATCH_PRIORITY};
use crate::types::{DirectiveKind, MatchTier, QueryReport, RuleGroup, WinningMatch};

/// A recorded rule match: its priority and the source line it came from.
/// Priority `-1` means no match has been recorded yet.
#[derive(Debug, Clone, Copy)]
struct Match {
    priority: i32,
    line: usize,
}

impl Match {
    const NONE: Match = Match {
        priority: NO_MATCH_PRIORITY,
        line: 0,
    };

    /// Keep the higher-priority match. Strict comparison, so on equal
    /// priority the earlier-recorded match (and its line number) wins.
    fn update(&mut self, other: Match) {
        if other.priority > self.priority {
            *self = other;
        }
    }
}

/// Per-query match state for one directive kind, split by tier.
#[derive(Debug, Clone, Copy)]
struct MatchHierarchy {
    global: Match,
    specific: Match,
}

impl MatchHierarchy {
    const EMPTY: MatchHierarchy = MatchHierarchy {
        global: Match::NONE,
        specific: Match::NONE,
    };

    fn update(&mut self, specific: bool, m: Match) {
        if specific {
            self.specific.update(m);
        } else {
            self.global.update(m);
        }
    }
}

/// Resolve a query against the full ruleset.
///
/// Scans every group relevant to `agents` (specifically named, or global
/// via `*`), scores each Allow/Disallow rule with the strategy, and keeps
/// the best match per directive kind and tier. Specific-tier matches
/// override global-tier ones outright; within a tier the longer pattern
/// wins and Allow wins ties. A priority-0 match (an empty pattern) never
/// activates a tier, so a ruleset of only trivial patterns falls through
/// to the default: allowed.
pub(crate) fn evaluate(
    groups: &[RuleGroup],
    strategy: &dyn MatchStrategy,
    agents: &[&str],
    path: &str,
) -> QueryReport {
    let mut allowed = MatchHierarchy::EMPTY;
    let mut disallowed = MatchHierarchy::EMPTY;

    for group in groups {
        let specific = group.matches_agents(agents);
        if !specific && !group.global_agent {
            continue;
        }
        for rule in &group.rules {
            let (hierarchy, priority) = match rule.kind {
                DirectiveKind::Allow => (&mut allowed, strategy.match_allow(path, &rule.value)),
                DirectiveKind::Disallow => {
                    (&mut disallowed, strategy.match_disallow(path, &rule.value))
                }
                DirectiveKind::Sitemap => continue,
            };
            hierarchy.update(
                specific,
                Match {
                    priority,
                    line: rule.line,
                },
            );
        }
    }

    if allowed.specific.priority > 0 || disallowed.specific.priority > 0 {
        return decide_tier(allowed.specific, disallowed.specific, MatchTier::Specific);
    }
    if allowed.global.priority > 0 || disallowed.global.priority > 0 {
        return decide_tier(allowed.global, disallowed.global, MatchTier::Global);
    }
    QueryReport::default_allow()
}

fn decide_tier(allow: Match, disallow: Match, tier: MatchTier) -> QueryReport {
    let allowed = allow.priority >= disallow.priority;
    let (kind, winner) = if allowed {
        (DirectiveKind::Allow, allow)
    } else {
        (DirectiveKind::Disallow, disallow)
    };
    QueryReport::decided(
        allowed,
        WinningMatch {
            kind,
            line: winner.line,
            priority: winner.priority,
            tier,
        },
    )
}
