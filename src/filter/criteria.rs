use crate::model::{FilterCriteria, Listing};

/// Exact category, inclusive price ceiling and free-text title/description
/// search. Unset or empty criteria do not filter.
pub fn filter_by_price_and_tag(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches_price_and_tag(l, criteria))
        .cloned()
        .collect()
}

pub fn matches_price_and_tag(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let tag_ok = match criteria.tag.as_deref() {
        Some(tag) if !tag.is_empty() => listing.tags.iter().any(|t| t == tag),
        _ => true,
    };
    let price_ok = match criteria.max_price {
        Some(max) => listing.price <= max,
        None => true,
    };
    tag_ok && price_ok && matches_text(listing, criteria.text.as_deref())
}

fn matches_text(listing: &Listing, text: Option<&str>) -> bool {
    let needle = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return true,
    };
    listing.title.to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
}
