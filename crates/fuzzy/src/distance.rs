//! Levenshtein edit distance.

/// Calculate the Levenshtein edit distance between two strings.
///
/// Both inputs are case-folded before comparison. No other normalization is
/// applied: diacritics and punctuation stay significant.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Minimum number of single-character insertions, deletions and
/// substitutions needed to transform `a` into `b`.
///
/// # Example
/// ```
/// use foodshare_fuzzy::edit_distance;
///
/// assert_eq!(edit_distance("Kottu", "koththu"), 2);
/// assert_eq!(edit_distance("", "hello"), 5);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    folded_distance(&a.to_lowercase(), &b.to_lowercase())
}

/// Edit distance over inputs that are already case-folded.
///
/// Uses a single rolling row sized to the shorter input plus one, so scratch
/// space is `O(min(len(a), len(b)))` and local to the call.
pub(crate) fn folded_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let n = short.len();
    if n == 0 {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=n).collect();

    for (i, &lc) in long.iter().enumerate() {
        // row[j - 1] of the previous iteration, before it was overwritten
        let mut diagonal = row[0];
        row[0] = i + 1;

        for j in 1..=n {
            let above = row[j];
            let cost = usize::from(lc != short[j - 1]);
            row[j] = (above + 1).min(row[j - 1] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[n]
}
