use robotrules::{matches_pattern, MatchStrategy, Robots, NO_MATCH_PRIORITY};

/// A strategy that matches patterns case-insensitively by lowercasing
/// both sides before running the standard matcher.
struct CaseInsensitive;

impl CaseInsensitive {
    fn score(path: &str, pattern: &str) -> i32 {
        let path = path.to_ascii_lowercase();
        let pattern_lower = pattern.to_ascii_lowercase();
        if matches_pattern(&path, &pattern_lower) {
            i32::try_from(pattern.len()).unwrap_or(i32::MAX)
        } else {
            NO_MATCH_PRIORITY
        }
    }
}

impl MatchStrategy for CaseInsensitive {
    fn match_allow(&self, path: &str, pattern: &str) -> i32 {
        Self::score(path, pattern)
    }

    fn match_disallow(&self, path: &str, pattern: &str) -> i32 {
        Self::score(path, pattern)
    }
}

fn main() {
    let body = "user-agent: FooBot\ndisallow: /Admin/\n";

    let strict = Robots::parse(body);
    let relaxed = Robots::parse_with_strategy(body, CaseInsensitive);

    for path in ["/Admin/panel", "/admin/panel", "/ADMIN/panel"] {
        println!(
            "{path}: default={}, case-insensitive={}",
            strict.one_agent_allowed_by_robots("FooBot", path),
            relaxed.one_agent_allowed_by_robots("FooBot", path),
        );
    }
}
