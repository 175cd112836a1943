use contracts::usecases::u508_nl_query::Row;

/// One page cut out of a full result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub rows: Vec<Row>,
    /// Page actually returned (1-based)
    pub page: u32,
    /// At least 1, also for an empty result set
    pub total_pages: u32,
    pub total_count: u64,
}

/// Slices `rows` into pages of `page_size`; a page past the end yields the last page
pub fn paginate(rows: Vec<Row>, page: u32, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = (page as usize).clamp(1, total_pages);

    let rows = rows
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        rows,
        page: page as u32,
        total_pages: total_pages as u32,
        total_count: total_count as u64,
    }
}
