/// Normalize an ingredient string for matching: trim and lowercase.
///
/// No stemming and no quantity/unit stripping: recipe lines stay free text
/// like "500g ground beef" and matching works on containment alone.
#[inline]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Bidirectional containment match between a caller token and a recipe
/// ingredient line, both already normalized.
///
/// "egg" matches "3 large eggs" because it is a substring of the line;
/// "chicken breast" matches "chicken" because the line is a substring of the
/// token. Plural/singular pairs that are not substrings of each other do not
/// match; that is a known limit of the heuristic, not something to patch
/// over here.
#[inline]
pub fn is_match(token: &str, line: &str) -> bool {
    line.contains(token) || token.contains(line)
}

/// Whether a recipe ingredient line counts as "present": it matches any of
/// the caller's tokens. A line contributes at most one match no matter how
/// many tokens hit it.
#[inline]
pub fn is_present(line: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|token| is_match(token, line))
}
