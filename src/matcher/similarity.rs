use strsim::levenshtein;

// Fixed score awarded when one normalized string contains the other.
// A deliberate "near match" bonus, not a literal overlap ratio.
const CONTAINMENT_SCORE: f64 = 85.0;

/// Apply basic normalization: lowercase, trim, collapse whitespace runs
fn normalize(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compute a normalized similarity percentage in [0, 100] for two strings,
/// tolerant of case, surrounding whitespace, and internal whitespace runs.
///
/// Precedence: empty input scores 0; exact match after normalization scores
/// 100; containment either way scores a fixed 85; otherwise the score is
/// derived from the Levenshtein distance over the normalized strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let norm1 = normalize(a);
    let norm2 = normalize(b);

    // Whitespace-only inputs normalize to empty
    if norm1.is_empty() || norm2.is_empty() {
        return 0.0;
    }

    if norm1 == norm2 {
        return 100.0;
    }

    if norm1.contains(&norm2) || norm2.contains(&norm1) {
        return CONTAINMENT_SCORE;
    }

    let distance = levenshtein(&norm1, &norm2);
    let max_len = norm1.chars().count().max(norm2.chars().count());

    ((1.0 - distance as f64 / max_len as f64) * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(similarity("Gurjan Plywood 18mm", "Gurjan Plywood 18mm"), 100.0);
        // Case and whitespace insensitive
        assert_eq!(similarity(" CENTURY  Plywood ", "century plywood"), 100.0);
    }

    #[test]
    fn test_containment_shortcut() {
        assert_eq!(similarity("Plywood", "Plywoods"), 85.0);
        assert_eq!(similarity("Plywoods", "Plywood"), 85.0);
        assert_eq!(similarity("MR Plywood", "Greenply MR Plywood"), 85.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(similarity("", "Plywood"), 0.0);
        assert_eq!(similarity("Plywood", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
        // Whitespace-only trims to empty
        assert_eq!(similarity("   ", "Plywood"), 0.0);
    }

    #[test]
    fn test_edit_distance_ratio() {
        // "kitten" -> "sitting": distance 3 over max length 7
        let score = similarity("kitten", "sitting");
        assert!((score - (1.0 - 3.0 / 7.0) * 100.0).abs() < 1e-9);

        // "beech" -> "birch": distance 2 over max length 5
        assert!((similarity("beech", "birch") - 60.0).abs() < 1e-9);

        // Nothing in common
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_symmetry_and_range() {
        let pairs = [
            ("Century Plywood", "Century Ply"),
            ("18mm", "19mm"),
            ("sqft", "pieces"),
            ("Gurjan", "Greenply"),
        ];
        for (a, b) in pairs {
            let forward = similarity(a, b);
            let backward = similarity(b, a);
            assert_eq!(forward, backward, "similarity not symmetric for {:?}", (a, b));
            assert!((0.0..=100.0).contains(&forward));
        }
    }
}
