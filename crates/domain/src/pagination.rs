//! Fixed-size, 1-based pagination over ordered sequences.

/// Number of questions per page. Not configurable per request.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns page `page` (1-based) of `items`.
///
/// The slice covers `[(page - 1) * page_size, page * page_size)` clipped to
/// the sequence. Pages before the first or past the last are empty.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 {
        return &[];
    }
    let Ok(index) = usize::try_from(page - 1) else {
        return &[];
    };

    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of non-empty pages needed to show `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
