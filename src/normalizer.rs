// Tag and search query normalization

/// Lower-cases, trims and collapses internal whitespace.
pub fn normalize_tag(tag: &str) -> String {
    tag.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter().map(|t| normalize_tag(t)).collect()
}

/// Splits a search box string like `"tent, Camping  gear"` into search tags.
/// Empty fragments are dropped, duplicates keep their first position.
pub fn split_search_query(query: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for part in query.split([',', ';']) {
        let tag = normalize_tag(part);
        if tag.is_empty() || tags.contains(&tag) {
            continue;
        }
        tags.push(tag);
    }

    tags
}
