//! Word-splitting policies for composing messages from named banners
//!
//! Given free text and the names in a banner set, a splitter decides how to
//! decompose the text into a concatenation of known names. The three
//! policies share one signature so callers can switch policy without other
//! changes; `None` uniformly means "no split under this policy".

use serde::{Deserialize, Serialize};

/// Policy for decomposing a word into banner names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    /// Pass the word through untouched; the caller resolves it as a single
    /// name and reports an unknown-name error itself.
    No,
    /// Commit to the longest matching prefix at every step. Cheap, but can
    /// miss splits that a shorter first token would have allowed.
    Longest,
    /// Enumerate every decomposition and succeed only when exactly one
    /// exists. Exponential in the worst case, so the search carries a node
    /// budget; exhausting it counts as "no split".
    Single,
}

/// Expansion cap for the `Single` search.
const SEARCH_BUDGET: usize = 100_000;

/// Split `text` into known names under the given policy.
///
/// Name order in the vocabulary does not matter: candidates are always
/// tried longest first with lexicographic tie-break, so results are stable
/// across runs.
///
/// # Examples
///
/// ```
/// use bannerforge::split::{split, SplitMode};
///
/// let names = ["ab".to_string(), "abc".to_string(), "c".to_string()];
/// assert_eq!(split(SplitMode::No, "abc", &names), Some(vec!["abc".to_string()]));
/// assert_eq!(split(SplitMode::Longest, "abc", &names), Some(vec!["abc".to_string()]));
/// // Ambiguous: both ["abc"] and ["ab", "c"] are valid.
/// assert_eq!(split(SplitMode::Single, "abc", &names), None);
/// ```
pub fn split(mode: SplitMode, text: &str, names: &[String]) -> Option<Vec<String>> {
    match mode {
        SplitMode::No => Some(vec![text.to_string()]),
        SplitMode::Longest => split_longest(text, &ordered_candidates(names)),
        SplitMode::Single => split_single(text, &ordered_candidates(names)),
    }
}

/// Candidates longest-first, ties broken lexicographically. Empty names
/// never consume input and are dropped.
fn ordered_candidates(names: &[String]) -> Vec<&str> {
    let mut candidates: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|n| !n.is_empty())
        .collect();
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    candidates.dedup();
    candidates
}

fn split_longest(text: &str, candidates: &[&str]) -> Option<Vec<String>> {
    let mut rest = text;
    let mut parts = Vec::new();
    while !rest.is_empty() {
        let name = candidates.iter().find(|n| rest.starts_with(**n))?;
        parts.push((*name).to_string());
        rest = &rest[name.len()..];
    }
    Some(parts)
}

fn split_single(text: &str, candidates: &[&str]) -> Option<Vec<String>> {
    if text.is_empty() {
        // Empty word: no split requested, not a failure.
        return Some(Vec::new());
    }
    let mut results: Vec<Vec<String>> = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut budget = SEARCH_BUDGET;
    let completed = collect_splits(text, candidates, &mut path, &mut results, &mut budget);
    if !completed {
        return None;
    }
    if results.len() == 1 {
        results.pop()
    } else {
        // Zero decompositions or an ambiguity: both are failures here.
        None
    }
}

/// Depth-first enumeration of decompositions. Stops early once two are
/// found (enough to prove ambiguity) and returns `false` when the budget
/// runs out before the answer is known.
fn collect_splits(
    text: &str,
    candidates: &[&str],
    path: &mut Vec<String>,
    results: &mut Vec<Vec<String>>,
    budget: &mut usize,
) -> bool {
    if results.len() >= 2 {
        return true;
    }
    if *budget == 0 {
        return false;
    }
    *budget -= 1;
    if text.is_empty() {
        results.push(path.clone());
        return true;
    }
    for name in candidates {
        if let Some(rest) = text.strip_prefix(name) {
            path.push((*name).to_string());
            let completed = collect_splits(rest, candidates, path, results, budget);
            path.pop();
            if !completed {
                return false;
            }
            if results.len() >= 2 {
                return true;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_verbatim_always_passes_through() {
        let vocab = names(&["ab", "abc", "c"]);
        assert_eq!(
            split(SplitMode::No, "abc", &vocab),
            Some(vec!["abc".to_string()])
        );
        assert_eq!(
            split(SplitMode::No, "zzz", &vocab),
            Some(vec!["zzz".to_string()])
        );
    }

    #[test]
    fn test_longest_prefers_the_longest_prefix() {
        let vocab = names(&["ab", "abc", "c"]);
        assert_eq!(
            split(SplitMode::Longest, "abc", &vocab),
            Some(vec!["abc".to_string()])
        );
        assert_eq!(
            split(SplitMode::Longest, "abcc", &vocab),
            Some(vec!["abc".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_longest_commits_without_backtracking() {
        // "abc" + "d" would need first token "ab", but "abc" wins and the
        // remainder "d" is unreachable. Documented policy, not a bug.
        let vocab = names(&["ab", "abc", "cd"]);
        assert_eq!(split(SplitMode::Longest, "abcd", &vocab), None);
    }

    #[test]
    fn test_longest_fails_on_unknown_remainder() {
        let vocab = names(&["ab"]);
        assert_eq!(split(SplitMode::Longest, "abx", &vocab), None);
    }

    #[test]
    fn test_longest_empty_text_is_an_empty_split() {
        let vocab = names(&["ab"]);
        assert_eq!(split(SplitMode::Longest, "", &vocab), Some(Vec::new()));
    }

    #[test]
    fn test_longest_tie_break_is_lexicographic() {
        let vocab = names(&["ba", "ab", "a", "b"]);
        // "ab" and "ba" tie on length; "ab" sorts first and matches.
        assert_eq!(
            split(SplitMode::Longest, "abba", &vocab),
            Some(vec!["ab".to_string(), "ba".to_string()])
        );
    }

    #[test]
    fn test_single_rejects_ambiguity() {
        let vocab = names(&["ab", "abc", "c"]);
        assert_eq!(split(SplitMode::Single, "abc", &vocab), None);
    }

    #[test]
    fn test_single_accepts_unique_decomposition() {
        let vocab = names(&["ab", "cd"]);
        assert_eq!(
            split(SplitMode::Single, "abcd", &vocab),
            Some(vec!["ab".to_string(), "cd".to_string()])
        );
    }

    #[test]
    fn test_single_finds_split_longest_misses() {
        let vocab = names(&["ab", "abc", "cd"]);
        assert_eq!(
            split(SplitMode::Single, "abcd", &vocab),
            Some(vec!["ab".to_string(), "cd".to_string()])
        );
    }

    #[test]
    fn test_single_fails_on_zero_decompositions() {
        let vocab = names(&["ab"]);
        assert_eq!(split(SplitMode::Single, "xyz", &vocab), None);
    }

    #[test]
    fn test_single_empty_text_is_an_empty_split() {
        let vocab = names(&["ab"]);
        assert_eq!(split(SplitMode::Single, "", &vocab), Some(Vec::new()));
    }

    #[test]
    fn test_single_budget_guard_fails_closed() {
        // No decomposition exists (trailing "b"), but proving that naively
        // explores a Fibonacci-sized tree; the budget must stop the search
        // and report no split instead of hanging.
        let vocab = names(&["a", "aa"]);
        let text = format!("{}b", "a".repeat(200));
        assert_eq!(split(SplitMode::Single, &text, &vocab), None);
    }

    #[test]
    fn test_empty_vocabulary_names_are_ignored() {
        let vocab = names(&["", "ab"]);
        assert_eq!(
            split(SplitMode::Longest, "abab", &vocab),
            Some(vec!["ab".to_string(), "ab".to_string()])
        );
        assert_eq!(
            split(SplitMode::Single, "ab", &vocab),
            Some(vec!["ab".to_string()])
        );
    }
}
