//! Pagination with out-of-range page clamping.

use super::ListResult;

/// Page count for a filtered total: `ceil(total / per_page)`, minimum 1.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    usize::max(1, total_items.div_ceil(per_page))
}

/// Slice one page out of the filtered, sorted item set.
///
/// A requested page past the end resolves to the last valid page rather
/// than an empty result; only a genuinely empty item set yields an empty
/// page (as page 1 of 1).
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> ListResult<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, per_page);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    ListResult {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
