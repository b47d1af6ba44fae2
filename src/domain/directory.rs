//! Sorted, searchable directory of sibling subdomains.
//!
//! [`DomainDirectory`] is built once from the static domain list and never
//! mutated afterwards. Every search produces a fresh [`DirectoryView`]
//! borrowed from the directory; nothing derived from a search is stored.

use std::cmp::Ordering;

use super::Domain;

/// Heading of the main section when no search is active.
pub const ALL_SITES_HEADING: &str = "All Sites";

/// Heading of the main section while searching.
pub const SEARCH_RESULTS_HEADING: &str = "Search Results";

/// A domain paired with its case-folded name.
#[derive(Debug, Clone)]
struct DirectoryEntry {
    domain: Domain,
    folded_name: String,
}

impl DirectoryEntry {
    fn new(domain: Domain) -> Self {
        let folded_name = domain.name.to_lowercase();
        Self {
            domain,
            folded_name,
        }
    }

    fn matches(&self, folded_term: &str) -> bool {
        self.folded_name.contains(folded_term)
    }
}

/// Pinned entries first, then case-insensitive name order. The raw name
/// breaks ties between names that differ only in case.
fn directory_order(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.domain
        .pinned
        .cmp(&a.domain.pinned)
        .then_with(|| a.folded_name.cmp(&b.folded_name))
        .then_with(|| a.domain.name.cmp(&b.domain.name))
}

/// Immutable, display-ordered collection of [`Domain`]s.
#[derive(Debug, Clone, Default)]
pub struct DomainDirectory {
    entries: Vec<DirectoryEntry>,
}

impl DomainDirectory {
    /// Builds the directory, ordering pinned domains before unpinned ones
    /// and each group by case-insensitive name.
    #[must_use]
    pub fn initialize(domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut entries: Vec<DirectoryEntry> =
            domains.into_iter().map(DirectoryEntry::new).collect();
        entries.sort_by(directory_order);
        Self { entries }
    }

    /// Iterates over all domains in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Domain> {
        self.entries.iter().map(|e| &e.domain)
    }

    /// Number of domains in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory holds no domains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pinned domains.
    #[must_use]
    pub fn pinned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.domain.pinned).count()
    }

    /// Returns the domains whose name contains `term`, ignoring case, in
    /// display order. An empty term returns every domain.
    #[must_use]
    pub fn filter(&self, term: &str) -> Vec<&Domain> {
        if term.is_empty() {
            return self.iter().collect();
        }
        let folded_term = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.matches(&folded_term))
            .map(|e| &e.domain)
            .collect()
    }

    /// Derives the pinned and main sections shown for `term`.
    #[must_use]
    pub fn view<'a>(&'a self, term: &'a str) -> DirectoryView<'a> {
        DirectoryView::derive(term, self.filter(term))
    }
}

/// Sections of the "All sites" dialog for one search term.
///
/// Without a search the pinned domains are listed once in `pinned` and
/// `main` holds only the unpinned ones. While searching there is no pinned
/// section and `main` holds every match in directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView<'a> {
    /// Search term the view was derived for.
    pub search: &'a str,
    /// Pinned section (always empty while searching).
    pub pinned: Vec<&'a Domain>,
    /// Main / results section.
    pub main: Vec<&'a Domain>,
    /// Whether the filter matched at least one domain.
    pub has_results: bool,
}

impl<'a> DirectoryView<'a> {
    fn derive(search: &'a str, filtered: Vec<&'a Domain>) -> Self {
        let has_results = !filtered.is_empty();
        if !search.is_empty() {
            return Self {
                search,
                pinned: Vec::new(),
                main: filtered,
                has_results,
            };
        }
        let (pinned, main): (Vec<&Domain>, Vec<&Domain>) =
            filtered.into_iter().partition(|d| d.pinned);
        Self {
            search,
            pinned,
            main,
            has_results,
        }
    }

    /// Returns `true` when a search term is active.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Heading for the main section.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.is_searching() {
            SEARCH_RESULTS_HEADING
        } else {
            ALL_SITES_HEADING
        }
    }

    /// Whether a domain in the main section carries the pinned marker.
    #[must_use]
    pub fn marks_pinned(&self, domain: &Domain) -> bool {
        domain.pinned && self.is_searching()
    }

    /// Total number of domains across both sections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pinned.len() + self.main.len()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample() -> DomainDirectory {
        DomainDirectory::initialize(vec![
            Domain::new("Zeta", "https://z"),
            Domain::new("Alpha", "https://a").pinned(),
            Domain::new("beta", "https://b"),
        ])
    }

    fn names<'a>(domains: impl IntoIterator<Item = &'a Domain>) -> Vec<&'a str> {
        domains.into_iter().map(|d| d.name.as_str()).collect()
    }

    fn larger() -> DomainDirectory {
        DomainDirectory::initialize(vec![
            Domain::new("mail", "https://mail.o-d.dev"),
            Domain::new("Docs", "https://docs.o-d.dev").pinned(),
            Domain::new("analytics", "https://analytics.o-d.dev"),
            Domain::new("Blog", "https://blog.o-d.dev"),
            Domain::new("status", "https://status.o-d.dev").pinned(),
            Domain::new("Api", "https://api.o-d.dev").pinned(),
            Domain::new("cdn", "https://cdn.o-d.dev"),
        ])
    }

    #[test]
    fn initialize_orders_pinned_then_alphabetical() {
        assert_eq!(names(sample().iter()), ["Alpha", "beta", "Zeta"]);
        assert_eq!(
            names(larger().iter()),
            ["Api", "Docs", "status", "analytics", "Blog", "cdn", "mail"]
        );
    }

    #[test]
    fn pinned_first_then_names_ascend() {
        let dir = larger();
        let all: Vec<&Domain> = dir.iter().collect();
        let first_unpinned = all.iter().position(|d| !d.pinned).unwrap_or(all.len());
        assert!(all.iter().skip(first_unpinned).all(|d| !d.pinned));
        for pair in all.windows(2) {
            let [a, b] = pair else {
                panic!("windows(2) yields pairs");
            };
            if a.pinned == b.pinned {
                assert!(a.name.to_lowercase() <= b.name.to_lowercase());
            }
        }
    }

    #[test]
    fn case_only_differences_are_deterministic() {
        let dir = DomainDirectory::initialize(vec![
            Domain::new("beta", "https://b2"),
            Domain::new("Beta", "https://b1"),
        ]);
        assert_eq!(names(dir.iter()), ["Beta", "beta"]);
    }

    #[test]
    fn empty_filter_is_identity() {
        let dir = larger();
        let all: Vec<&Domain> = dir.iter().collect();
        assert_eq!(dir.filter(""), all);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let dir = larger();
        assert_eq!(names(dir.filter("DO")), ["Docs"]);
        assert_eq!(names(dir.filter("a")), ["Api", "status", "analytics", "mail"]);
    }

    #[test]
    fn filter_returns_exactly_the_matches() {
        let dir = larger();
        for term in ["a", "s", "B", "cd", "o-d", "x", " "] {
            let got = dir.filter(term);
            let folded = term.to_lowercase();
            let expected: Vec<&Domain> = dir
                .iter()
                .filter(|d| d.name.to_lowercase().contains(&folded))
                .collect();
            assert_eq!(got, expected, "term {term:?}");
        }
    }

    #[test]
    fn filter_is_repeatable() {
        let dir = larger();
        assert_eq!(dir.filter("t"), dir.filter("t"));
        assert_eq!(dir.view("t"), dir.view("t"));
    }

    #[test]
    fn non_ascii_terms_fold() {
        let dir = DomainDirectory::initialize(vec![
            Domain::new("Ünicode", "https://u"),
            Domain::new("plain", "https://p"),
        ]);
        assert_eq!(names(dir.filter("üNI")), ["Ünicode"]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let dir = sample();
        let view = dir.view("xyz");
        assert!(dir.filter("xyz").is_empty());
        assert!(!view.has_results);
        assert!(view.pinned.is_empty());
        assert!(view.main.is_empty());
        assert_eq!(view.heading(), SEARCH_RESULTS_HEADING);
    }

    #[test]
    fn view_without_search_splits_pinned() {
        let dir = sample();
        let view = dir.view("");
        assert!(!view.is_searching());
        assert_eq!(names(view.pinned.iter().copied()), ["Alpha"]);
        assert_eq!(names(view.main.iter().copied()), ["beta", "Zeta"]);
        assert!(view.has_results);
        assert_eq!(view.heading(), ALL_SITES_HEADING);
        assert_eq!(view.total(), 3);
    }

    #[test]
    fn view_while_searching_keeps_pinned_in_results() {
        let dir = sample();
        let view = dir.view("a");
        assert!(view.pinned.is_empty());
        assert_eq!(names(view.main.iter().copied()), ["Alpha", "beta", "Zeta"]);
        let Some(alpha) = view.main.first() else {
            panic!("alpha expected");
        };
        assert!(view.marks_pinned(alpha));
        assert!(!dir.view("").marks_pinned(alpha));
    }

    #[test]
    fn all_pinned_without_search_still_has_results() {
        let dir = DomainDirectory::initialize(vec![Domain::new("only", "https://o").pinned()]);
        let view = dir.view("");
        assert!(view.has_results);
        assert!(view.main.is_empty());
        assert_eq!(view.pinned.len(), 1);
    }

    #[test]
    fn empty_directory() {
        let dir = DomainDirectory::initialize(Vec::new());
        assert!(dir.is_empty());
        assert_eq!(dir.len(), 0);
        let view = dir.view("");
        assert!(!view.has_results);
    }

    #[test]
    fn counts() {
        let dir = larger();
        assert_eq!(dir.len(), 7);
        assert_eq!(dir.pinned_count(), 3);
    }
}
