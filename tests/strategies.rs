use proptest::prelude::*;

// --- Shared generators ---
//
// Paths and literal patterns draw from an ASCII alphabet with no `*`,
// `$`, `%`, or whitespace, so a generated pattern passes through the
// scanner and normalizer unchanged and matches purely as a prefix.

pub const AGENTS: &[&str] = &["FooBot", "BarBot", "BazBot", "CrawlBot"];

/// A URL path: `/` followed by safe ASCII.
pub fn arb_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/[a-z0-9./_-]{0,24}").expect("valid regex")
}

/// A literal pattern (no wildcards or anchors).
pub fn arb_literal_pattern() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/[a-z0-9./_-]{0,12}").expect("valid regex")
}

/// A path together with one of its prefixes (both all-ASCII, so byte
/// slicing is safe).
pub fn arb_path_with_prefix() -> impl Strategy<Value = (String, String)> {
    arb_path().prop_flat_map(|path| {
        let len = path.len();
        (Just(path), 0..=len).prop_map(|(path, cut)| {
            let prefix = path[..cut].to_owned();
            (path, prefix)
        })
    })
}

/// One agent name from the fixed roster.
pub fn arb_agent() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(AGENTS)
}
