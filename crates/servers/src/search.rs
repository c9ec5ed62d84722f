//! The search engine shared by every server backend.

use catalog_core::{N_MAX_RETURNED_ENTRIES, ServerError, ServerResult};
use catalog_products::{NamePattern, Product};

/// Filter, bound and sort a backend's products.
///
/// 1. keep products whose name has exactly `letter_count` letters and 2 or 3
///    digits (non-matching names are dropped silently);
/// 2. reject the search if more than [`N_MAX_RETURNED_ENTRIES`] products match;
/// 3. return the matches sorted by ascending price.
///
/// The sort is stable: equal prices keep the order `products` yielded them in.
/// An empty match set is a success.
pub fn get_entries<'a, I>(products: I, letter_count: usize) -> ServerResult<Vec<Product>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let pattern = NamePattern::with_letter_count(letter_count);

    let mut candidates = 0usize;
    let matched: Vec<&Product> = products
        .into_iter()
        .inspect(|_| candidates += 1)
        .filter(|p| pattern.matches(p.product_name()))
        .collect();

    tracing::debug!(
        letter_count,
        %pattern,
        candidates,
        matched = matched.len(),
        "searched products"
    );

    if matched.len() > N_MAX_RETURNED_ENTRIES {
        tracing::debug!(
            letter_count,
            found = matched.len(),
            limit = N_MAX_RETURNED_ENTRIES,
            "search rejected as too broad"
        );
        return Err(ServerError::too_many_products(
            matched.len(),
            N_MAX_RETURNED_ENTRIES,
        ));
    }

    let mut entries: Vec<Product> = matched.into_iter().cloned().collect();
    entries.sort_by(|a, b| a.price().total_cmp(&b.price()));
    Ok(entries)
}
