use crate::filter::tables::{DEFAULT_TABLES, MatchTables};
use crate::normalizer::normalize_tag;
use tracing::debug;

/// Substring matches only count when the contained string is longer than this.
const MIN_SUBSTRING_LEN: usize = 3;

/// Relevance check against the built-in tables.
pub fn is_relevant_match<L, S>(listing_tags: &[L], search_tags: &[S]) -> bool
where
    L: AsRef<str>,
    S: AsRef<str>,
{
    is_relevant_match_with(listing_tags, search_tags, &DEFAULT_TABLES)
}

/// Decides whether a listing's tags are a relevant hit for the search tags.
///
/// A listing is rejected outright when any of its tags contains a term that
/// conflicts with one of the search tags. Otherwise at least half of the
/// search tags (rounded up) must find a matching listing tag.
pub fn is_relevant_match_with<L, S>(
    listing_tags: &[L],
    search_tags: &[S],
    tables: &MatchTables,
) -> bool
where
    L: AsRef<str>,
    S: AsRef<str>,
{
    if search_tags.is_empty() {
        return true;
    }
    if listing_tags.is_empty() {
        return false;
    }

    let listing: Vec<String> = listing_tags.iter().map(|t| normalize_tag(t.as_ref())).collect();
    let search: Vec<String> = search_tags.iter().map(|t| normalize_tag(t.as_ref())).collect();

    if let Some((search_tag, conflict)) = find_conflict(&listing, &search, tables) {
        debug!("Rejected by conflict: '{}' vs '{}'", search_tag, conflict);
        return false;
    }

    let required = search_tags.len().div_ceil(2);
    let matched = search
        .iter()
        .filter(|s| (0..listing.len()).any(|i| tag_matches(&listing, i, s, tables)))
        .count();

    matched >= required
}

fn find_conflict<'a>(
    listing: &[String],
    search: &'a [String],
    tables: &'a MatchTables,
) -> Option<(&'a str, &'a str)> {
    for search_tag in search {
        for conflict in tables.conflicts_for(search_tag) {
            if listing.iter().any(|tag| tag.contains(conflict.as_str())) {
                return Some((search_tag.as_str(), conflict.as_str()));
            }
        }
    }
    None
}

/// Does `listing[index]` match a single normalized search tag?
fn tag_matches(listing: &[String], index: usize, search: &str, tables: &MatchTables) -> bool {
    let tag = listing[index].as_str();

    // A bare generic word needs a context term on some other tag.
    if tables.is_generic(search) {
        return tag == search
            && listing
                .iter()
                .enumerate()
                .any(|(j, other)| j != index && tables.mentions_context(other));
    }

    if tag == search {
        return true;
    }

    if search.contains(' ') {
        let words: Vec<&str> = search.split(' ').collect();
        let has_context = words.iter().any(|&w| tables.is_context(w) && tag.contains(w));
        let has_generic = words.iter().any(|&w| tables.is_generic(w) && tag.contains(w));
        if has_context && has_generic {
            return true;
        }
        return words.iter().all(|&w| tag.contains(w));
    }

    (search.chars().count() > MIN_SUBSTRING_LEN && tag.contains(search))
        || (tag.chars().count() > MIN_SUBSTRING_LEN && search.contains(tag))
}
