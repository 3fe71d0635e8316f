//! Navigation index: pairing links with their resolved sections.
//!
//! The index is built once per mount by walking the navigation links in
//! source order. Every link keeps its slot: a link whose target does not
//! resolve stays in the list as [`Target::Unresolved`] instead of being
//! filtered out, so index correspondence between links and sections cannot
//! drift when the navigation mixes in external links.

/// Resolution outcome for a single navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<S> {
    /// The link's fragment resolved to a section.
    Resolved(S),
    /// The link has no usable fragment, or the fragment matched nothing.
    /// An expected condition, not an error.
    Unresolved,
}

impl<S> Target<S> {
    /// The resolved section, if any.
    pub fn as_resolved(&self) -> Option<&S> {
        match self {
            Target::Resolved(section) => Some(section),
            Target::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Target::Resolved(_))
    }
}

/// One navigation link paired with its resolution outcome.
#[derive(Debug, Clone)]
pub struct NavEntry<L, S> {
    pub link: L,
    pub target: Target<S>,
}

/// Ordered, immutable pairing of navigation links with sections.
///
/// `L` is the host's link handle and `S` its section handle (DOM elements in
/// the browser, anything convenient in tests). Built once per mount and held
/// for the rest of the page session.
#[derive(Debug, Clone)]
pub struct NavIndex<L, S> {
    entries: Vec<NavEntry<L, S>>,
}

impl<L, S> NavIndex<L, S> {
    /// Build the index from `(link, fragment)` pairs in source order.
    ///
    /// `resolver` maps a fragment identifier (without the leading `#`) to a
    /// section handle. Links without a fragment, and fragments the resolver
    /// rejects, become [`Target::Unresolved`] entries.
    pub fn build<I, F>(links: I, mut resolver: F) -> Self
    where
        I: IntoIterator<Item = (L, Option<String>)>,
        F: FnMut(&str) -> Option<S>,
    {
        let entries: Vec<NavEntry<L, S>> = links
            .into_iter()
            .enumerate()
            .map(|(index, (link, fragment))| {
                let target = fragment
                    .as_deref()
                    .and_then(&mut resolver)
                    .map_or(Target::Unresolved, Target::Resolved);
                if !target.is_resolved() {
                    log::debug!("navigation link {} has no resolvable target", index);
                }
                NavEntry { link, target }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry<L, S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The link handle at `index`, if in range.
    pub fn link_at(&self, index: usize) -> Option<&L> {
        self.entries.get(index).map(|entry| &entry.link)
    }

    /// Number of entries with a resolved section.
    pub fn resolved_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.target.is_resolved())
            .count()
    }
}

impl<L, S> Default for NavIndex<L, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

/// Extract the fragment identifier from a hyperlink target.
///
/// Returns the identifier without the leading `#`. Targets that are not pure
/// fragment references (external URLs, empty strings, a bare `#`) yield
/// `None`, leaving the link unresolved.
pub fn fragment_of(href: &str) -> Option<&str> {
    let rest = href.strip_prefix('#')?;
    if rest.is_empty() { None } else { Some(rest) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sections() -> HashMap<&'static str, u32> {
        HashMap::from([("intro", 0), ("about", 500), ("contact", 1000)])
    }

    #[test]
    fn test_build_preserves_order_and_length() {
        let sections = sections();
        let links = vec![
            ("a", Some("intro".to_string())),
            ("b", Some("about".to_string())),
            ("c", Some("contact".to_string())),
        ];
        let index = NavIndex::build(links, |fragment| sections.get(fragment).copied());

        assert_eq!(index.len(), 3);
        let tops: Vec<Option<u32>> = index
            .entries()
            .iter()
            .map(|entry| entry.target.as_resolved().copied())
            .collect();
        assert_eq!(tops, vec![Some(0), Some(500), Some(1000)]);
        assert_eq!(index.link_at(1), Some(&"b"));
    }

    #[test]
    fn test_unresolved_link_keeps_its_slot() {
        let sections = sections();
        let links = vec![
            ("a", Some("intro".to_string())),
            ("external", None),
            ("c", Some("contact".to_string())),
        ];
        let index = NavIndex::build(links, |fragment| sections.get(fragment).copied());

        // The gap must not shift later entries.
        assert_eq!(index.len(), 3);
        assert!(!index.entries()[1].target.is_resolved());
        assert_eq!(index.entries()[2].target.as_resolved(), Some(&1000));
        assert_eq!(index.resolved_count(), 2);
    }

    #[test]
    fn test_build_unknown_fragment_is_unresolved() {
        let sections = sections();
        let links = vec![("a", Some("missing".to_string()))];
        let index = NavIndex::build(links, |fragment| sections.get(fragment).copied());

        assert_eq!(index.len(), 1);
        assert_eq!(index.resolved_count(), 0);
    }

    #[test]
    fn test_build_empty() {
        let index: NavIndex<&str, u32> = NavIndex::build(Vec::new(), |_| None);
        assert!(index.is_empty());
        assert_eq!(index.link_at(0), None);
    }

    #[test]
    fn test_fragment_of() {
        assert_eq!(fragment_of("#about"), Some("about"));
        assert_eq!(fragment_of("#"), None);
        assert_eq!(fragment_of(""), None);
        assert_eq!(fragment_of("https://example.com/#about"), None);
        assert_eq!(fragment_of("about"), None);
    }
}
