use crate::model::Listing;
use crate::normalizer::normalize_tag;

/// Moves listings located at `home` to the front. The sort is stable, so
/// ties keep their input order. A blank `home` leaves the order untouched.
pub fn sort_by_locality(listings: &mut [Listing], home: &str) {
    let home = normalize_tag(home);
    if home.is_empty() {
        return;
    }
    listings.sort_by_key(|l| !normalize_tag(&l.location).contains(&home));
}
