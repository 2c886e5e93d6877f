//! Fuzzy name suggestions for misses against the name vocabulary.

/// Maximum number of suggestions offered for an unmatched name.
pub const SUGGESTION_LIMIT: usize = 3;

/// Minimum similarity for a vocabulary entry to qualify as a suggestion.
pub const SUGGESTION_CUTOFF: f64 = 0.6;

/// Up to `limit` vocabulary entries whose similarity to `target` reaches
/// `cutoff`, best first; ties keep vocabulary order. Comparison is
/// case-sensitive, matching the name predicate itself.
pub fn close_matches(target: &str, vocabulary: &[&str], limit: usize, cutoff: f64) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = vocabulary
        .iter()
        .filter_map(|name| {
            let score = similarity(target, name);
            (score >= cutoff).then_some((score, *name))
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Similarity in [0, 1] as `1 - edit_distance / max_len`.
fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let distance = levenshtein(&a, &b);
    1.0 - distance as f64 / a.len().max(b.len()) as f64
}

/// Classic two-row Levenshtein distance over chars.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
