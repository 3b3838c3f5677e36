// core/src/subsequence.rs
//
// Ordered-subsequence test with a spread/gap cost, used by the lowest
// ranking tier. Greedy earliest-match: O(target) and minimal-span in
// practice for short dictionary keys, though not guaranteed minimal on
// targets with repeated letters. The greedy behavior is part of the
// observable ranking contract and must not be "improved".

/// Quality of a successful subsequence match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsequenceInfo {
    /// Distance between the first and last consumed target indices
    /// (0 for a single-letter query).
    pub span: usize,
    /// Number of target characters interposed between consecutive matched
    /// query characters: `span - (query_len - 1)`.
    pub gap_cost: usize,
    /// Target index of the first consumed character. Callers that need the
    /// match anchored to the start of the key require this to be 0.
    pub first_index: usize,
}

/// Test whether `query` occurs in `target` as an ordered, not necessarily
/// contiguous subsequence, walking the target left to right and consuming
/// the earliest possible position for each query character.
///
/// Returns `None` when the query does not fit (or is empty, in which case
/// there is nothing to anchor).
pub fn subsequence_info(query: &str, target: &str) -> Option<SubsequenceInfo> {
    let q: Vec<char> = query.chars().collect();
    if q.is_empty() {
        return None;
    }

    let mut qi = 0;
    let mut first_index = 0;
    let mut last_index = 0;
    for (ti, ch) in target.chars().enumerate() {
        if ch == q[qi] {
            if qi == 0 {
                first_index = ti;
            }
            last_index = ti;
            qi += 1;
            if qi == q.len() {
                break;
            }
        }
    }

    if qi != q.len() {
        return None;
    }

    let span = last_index - first_index;
    Some(SubsequenceInfo {
        span,
        gap_cost: span - (q.len() - 1),
        first_index,
    })
}
