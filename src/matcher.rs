//! Pattern matching for Allow/Disallow values.
//!
//! Robots.txt patterns are matched as prefixes of the URL path, with two
//! extensions: `*` matches any run of bytes (including none), and a `$` at
//! the end of the pattern anchors the match to the end of the path.

/// Sentinel priority meaning "the pattern did not match".
pub const NO_MATCH_PRIORITY: i32 = -1;

/// Scores Allow and Disallow patterns against a URL path.
///
/// A positive return value is the match priority (longer patterns outrank
/// shorter ones during resolution); [`NO_MATCH_PRIORITY`] means no match.
/// The two methods exist so the priority resolver can route results into
/// the correct hierarchy; implementations are free to treat them
/// identically, as [`LongestMatchStrategy`] does.
pub trait MatchStrategy {
    fn match_allow(&self, path: &str, pattern: &str) -> i32;
    fn match_disallow(&self, path: &str, pattern: &str) -> i32;
}

/// The default strategy: priority is the pattern length, which is how
/// Google's crawler weighs competing robots.txt directives.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestMatchStrategy;

impl MatchStrategy for LongestMatchStrategy {
    fn match_allow(&self, path: &str, pattern: &str) -> i32 {
        if matches_pattern(path, pattern) {
            pattern_priority(pattern)
        } else {
            NO_MATCH_PRIORITY
        }
    }

    fn match_disallow(&self, path: &str, pattern: &str) -> i32 {
        if matches_pattern(path, pattern) {
            pattern_priority(pattern)
        } else {
            NO_MATCH_PRIORITY
        }
    }
}

fn pattern_priority(pattern: &str) -> i32 {
    i32::try_from(pattern.len()).unwrap_or(i32::MAX)
}

/// Returns whether `path` matches `pattern`.
///
/// The pattern is consumed byte by byte against a set of candidate offsets
/// into the path (a multi-position simulation rather than backtracking, so
/// the worst case is `O(path_len * pattern_len)` even for adversarial
/// patterns). A literal byte must be present at a candidate offset for it
/// to survive; `*` widens the candidate set to every offset from the
/// smallest survivor through end-of-path; a `$` in a pattern whose last
/// byte is `$` requires a survivor at exactly end-of-path. An exhausted
/// pattern with any surviving candidate is a prefix match.
#[must_use]
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    let path = path.as_bytes();
    let pattern = pattern.as_bytes();
    let end_anchored = pattern.last() == Some(&b'$');

    // Candidate offsets into `path`, kept in ascending order.
    let mut pos: Vec<usize> = Vec::with_capacity(path.len() + 1);
    pos.push(0);

    for &pat in pattern {
        if pat == b'$' && end_anchored {
            return pos.last() == Some(&path.len());
        }
        if pat == b'*' {
            let lowest = pos[0];
            pos.clear();
            pos.extend(lowest..=path.len());
        } else {
            // Advance every candidate that has `pat` at its offset; the
            // compaction preserves ascending order.
            let mut kept = 0;
            for i in 0..pos.len() {
                if pos[i] < path.len() && path[pos[i]] == pat {
                    pos[kept] = pos[i] + 1;
                    kept += 1;
                }
            }
            pos.truncate(kept);
            if pos.is_empty() {
                return false;
            }
        }
    }

    true
}
