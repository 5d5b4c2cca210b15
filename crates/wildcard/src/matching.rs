use memchr::memchr;

/// The character that matches zero or more characters of a haystack.
pub const WILDCARD: char = '*';

const WILDCARD_LEN: usize = WILDCARD.len_utf8();

/// Tests whether the pattern matches the entire haystack.
///
/// - An empty pattern matches only an empty haystack
/// - A pattern consisting of a single `*` matches any haystack, including an empty one
/// - Any other pattern never matches an empty haystack
/// - A pattern without `*` matches only an identical haystack
///
/// # Examples
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches("", ""));
/// assert!(matches("*", ""));
/// assert!(!matches("a", ""));
///
/// assert!(matches("alpha*beta", "alphabeta"));
/// assert!(matches("*a*b*", "alphabeta"));
/// assert!(!matches("*a*b", "alphabeta"));
/// ```
pub fn matches(pattern: &str, haystack: &str) -> bool {
    if pattern.is_empty() {
        return haystack.is_empty();
    }

    if pattern.len() == WILDCARD_LEN && pattern.starts_with(WILDCARD) {
        return true;
    }

    if haystack.is_empty() {
        return false;
    }

    // The wildcard is ASCII, so a byte search never hits the middle of a multi-byte character.
    if memchr(WILDCARD as u8, pattern.as_bytes()).is_some() {
        return partial_match(pattern, haystack);
    }

    pattern == haystack
}

/// Tests whether the pattern matches the entire haystack ignoring case.
///
/// Both strings are converted with [`str::to_lowercase`] before matching.
/// This is the locale-independent Unicode lowercase mapping, not full case folding,
/// so characters that only fold into multi-character sequences (like `ß` and `SS`) are not equal.
///
/// # Examples
///
/// ```
/// use wildcard::matches_ci;
///
/// assert!(matches_ci("ALPHABETA", "alphabeta"));
/// assert!(matches_ci("*A*B*", "alphabeta"));
/// assert!(matches_ci("straße", "STRAẞE"));
/// ```
pub fn matches_ci(pattern: &str, haystack: &str) -> bool {
    matches(&pattern.to_lowercase(), &haystack.to_lowercase())
}

/// Tests whether the pattern matches at least one of the haystacks.
///
/// Stops at the first matching haystack. Returns `false` for an empty sequence.
///
/// # Examples
///
/// ```
/// use wildcard::matches_any;
///
/// let names = ["alpha", "beta", "gamma"];
/// assert!(matches_any("gamma", names));
/// assert!(matches_any("bet*", names));
/// assert!(!matches_any("foo", names));
/// assert!(!matches_any("*", Vec::<String>::new()));
/// ```
pub fn matches_any<I>(pattern: &str, haystacks: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    haystacks.into_iter().any(|haystack| matches(pattern, haystack.as_ref()))
}

/// Tests whether the pattern matches at least one of the haystacks ignoring case.
///
/// See [`matches_ci`] for the case conversion rules.
pub fn matches_any_ci<I>(pattern: &str, haystacks: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let pattern = pattern.to_lowercase();
    haystacks
        .into_iter()
        .any(|haystack| matches(&pattern, &haystack.as_ref().to_lowercase()))
}

// ---

/// Case sensitivity mode for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

impl Case {
    #[inline]
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case { Self::Insensitive } else { Self::Sensitive }
    }

    /// Tests whether the pattern matches the haystack, see [`matches`] and [`matches_ci`].
    #[inline]
    pub fn matches(self, pattern: &str, haystack: &str) -> bool {
        match self {
            Self::Sensitive => matches(pattern, haystack),
            Self::Insensitive => matches_ci(pattern, haystack),
        }
    }

    /// Tests whether the pattern matches any of the haystacks, see [`matches_any`] and [`matches_any_ci`].
    #[inline]
    pub fn matches_any<I>(self, pattern: &str, haystacks: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match self {
            Self::Sensitive => matches_any(pattern, haystacks),
            Self::Insensitive => matches_any_ci(pattern, haystacks),
        }
    }
}

// ---

// Each recursive call shortens either the pattern or the haystack,
// so consecutive wildcards cannot loop forever.
fn partial_match(mut pattern: &str, mut haystack: &str) -> bool {
    while let Some(p) = pattern.chars().next() {
        if p == WILDCARD {
            return partial_match(&pattern[WILDCARD_LEN..], haystack)
                || haystack
                    .chars()
                    .next()
                    .is_some_and(|h| partial_match(pattern, &haystack[h.len_utf8()..]));
        }

        match haystack.chars().next() {
            Some(h) if h == p => {}
            _ => return false,
        }

        pattern = &pattern[p.len_utf8()..];
        haystack = &haystack[p.len_utf8()..];
    }

    haystack.is_empty()
}

#[cfg(test)]
mod tests;
