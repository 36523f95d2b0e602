use crate::filter::criteria::filter_by_price_and_tag;
use crate::filter::locality::sort_by_locality;
use crate::filter::relevance::is_relevant_match_with;
use crate::filter::tables::MatchTables;
use crate::model::{FilterCriteria, Listing};
use tracing::debug;

/// Trait defining the interface for a listing filter.
pub trait FilterEngine {
    /// Returns the relevant subset of `listings`, never mutating the input.
    fn apply(&self, listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing>;
}

/// Price/category filter, then tag relevance, then locality ordering.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    tables: MatchTables,
    home: Option<String>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(mut self, tables: MatchTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn tables(&self) -> &MatchTables {
        &self.tables
    }
}

impl FilterEngine for ListingFilter {
    fn apply(&self, listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
        let candidates = filter_by_price_and_tag(listings, criteria);
        let before = candidates.len();

        let mut result: Vec<Listing> = candidates
            .into_iter()
            .filter(|l| {
                is_relevant_match_with(
                    l.tags.as_slice(),
                    criteria.search_tags.as_slice(),
                    &self.tables,
                )
            })
            .collect();

        debug!(
            "Filter: {} listings, {} after price/tag, {} relevant",
            listings.len(),
            before,
            result.len()
        );

        if let Some(home) = &self.home {
            sort_by_locality(&mut result, home);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingId;

    fn listing(id: i64, price: f64, location: &str, tags: &[&str]) -> Listing {
        Listing {
            id: ListingId::Num(id),
            title: format!("Listing {}", id),
            description: String::new(),
            price,
            location: location.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            availability: String::new(),
            rating: 4.5,
            review_count: 3,
            image_url: None,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<ListingId> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn composes_price_relevance_and_locality() {
        let listings = vec![
            listing(1, 30.0, "Lakeside", &["kayak", "paddle"]),
            listing(2, 80.0, "Downtown", &["kayak"]),
            listing(3, 15.0, "Downtown", &["kayak", "lake"]),
            listing(4, 10.0, "Downtown", &["ski", "winter"]),
        ];
        let criteria = FilterCriteria {
            tag: None,
            max_price: Some(50.0),
            search_tags: vec!["Kayak".into()],
            text: None,
        };
        let engine = ListingFilter::new().with_home("downtown");

        assert_eq!(ids(&engine.apply(&listings, &criteria)), vec![
            ListingId::Num(3),
            ListingId::Num(1)
        ]);
    }

    #[test]
    fn without_home_order_is_input_order() {
        let listings = vec![
            listing(1, 30.0, "Lakeside", &["kayak"]),
            listing(2, 30.0, "Downtown", &["kayak"]),
        ];
        let criteria = FilterCriteria {
            search_tags: vec!["kayak".into()],
            ..Default::default()
        };
        let result = ListingFilter::new().apply(&listings, &criteria);
        assert_eq!(ids(&result), vec![ListingId::Num(1), ListingId::Num(2)]);
    }

    #[test]
    fn input_is_left_untouched() {
        let listings = vec![
            listing(1, 30.0, "Lakeside", &["kayak"]),
            listing(2, 30.0, "Downtown", &["kayak"]),
        ];
        let copy = listings.clone();
        let engine = ListingFilter::new().with_home("Downtown");
        let _ = engine.apply(&listings, &FilterCriteria::default());
        assert_eq!(listings, copy);
    }
}
