//! Column detection over free-text table headers.

/// Locates a column in a table by inspecting its headers.
///
/// Implementations return the index of the chosen header, or `None` when no
/// header qualifies. Closures of the same shape implement the trait, so a
/// caller with a known layout can pin a column directly.
pub trait ColumnResolver {
    fn resolve(&self, headers: &[String]) -> Option<usize>;
}

impl<F> ColumnResolver for F
where
    F: Fn(&[String]) -> Option<usize>,
{
    fn resolve(&self, headers: &[String]) -> Option<usize> { self(headers) }
}

/// Case-insensitive keyword matcher. A header matches when, for every
/// keyword group, it contains at least one keyword of that group, and it
/// contains none of the excluded keywords. The first matching header wins.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatch {
    groups: Vec<Vec<&'static str>>,
    exclude: Vec<&'static str>,
}

impl KeywordMatch {
    pub fn new() -> Self { Self::default() }

    /// Require at least one of `keywords`.
    pub fn any_of(mut self, keywords: &[&'static str]) -> Self {
        self.groups.push(keywords.to_vec());
        self
    }

    /// Require `keyword`.
    pub fn containing(mut self, keyword: &'static str) -> Self {
        self.groups.push(vec![keyword]);
        self
    }

    /// Reject headers containing `keyword`.
    pub fn excluding(mut self, keyword: &'static str) -> Self {
        self.exclude.push(keyword);
        self
    }

    /// Whether a single header satisfies this matcher.
    pub fn matches(&self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.groups.iter().all(|group| group.iter().any(|k| header.contains(k)))
            && !self.exclude.iter().any(|k| header.contains(k))
    }
}

impl ColumnResolver for KeywordMatch {
    fn resolve(&self, headers: &[String]) -> Option<usize> {
        headers.iter().position(|header| self.matches(header))
    }
}
