//! Edit distance and fuzzy word matching.

/// Minimum similarity for two words to be paired by the diff engine.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
///
/// Lengths are counted in code points.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0; // Both empty strings are identical
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

/// Case-insensitive fuzzy comparison at [`SIMILARITY_THRESHOLD`].
pub fn is_similar(word1: &str, word2: &str) -> bool {
    is_similar_with_threshold(word1, word2, SIMILARITY_THRESHOLD)
}

/// Case-insensitive fuzzy comparison at an explicit threshold.
pub fn is_similar_with_threshold(word1: &str, word2: &str, threshold: f64) -> bool {
    let a = word1.to_lowercase();
    let b = word2.to_lowercase();

    if a == b {
        return true;
    }

    normalized_similarity(&a, &b) >= threshold
}
