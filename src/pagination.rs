//! Transparent pagination over list endpoints.

/// Page size requested from list endpoints.
pub const PAGE_LIMIT: usize = 100;

/// Position of one page, 1-indexed as the API expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub page: usize,
}

/// Fetches pages until one comes back shorter than `limit`, concatenating
/// their items in order. A full last page costs one extra empty request.
pub fn collect_pages<T, E, F>(limit: usize, mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(PageRequest) -> Result<Vec<T>, E>,
{
    let limit = limit.max(1);
    let mut items = Vec::new();
    let mut page = 1;
    loop {
        let batch = fetch(PageRequest { limit, page })?;
        let done = batch.len() < limit;
        items.extend(batch);
        if done {
            return Ok(items);
        }
        page += 1;
    }
}
