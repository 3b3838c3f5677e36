// core/src/candidate.rs
//
// Paged view over a flattened candidate list. The engine returns one flat
// ordered list per query; UIs show it a page at a time and select by
// on-page index.

/// A paginated list of candidate tokens.
#[derive(Debug, Clone)]
pub struct CandidateList {
    tokens: Vec<String>,
    page_size: usize,
    current_page: usize,
}

impl CandidateList {
    /// Create an empty list with the given page size (clamped to >= 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            tokens: Vec::new(),
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    /// Replace the tokens, resetting to the first page.
    pub fn set_tokens(&mut self, tokens: Vec<String>) {
        self.tokens = tokens;
        self.current_page = 0;
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn num_pages(&self) -> usize {
        self.tokens.len().div_ceil(self.page_size)
    }

    /// Current page index (0-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Tokens on the current page.
    pub fn page_tokens(&self) -> &[String] {
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.tokens.len());
        if start >= end {
            return &[];
        }
        &self.tokens[start..end]
    }

    /// Move to the previous page. Returns true if the page changed.
    pub fn page_up(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the next page. Returns true if the page changed.
    pub fn page_down(&mut self) -> bool {
        if self.current_page + 1 < self.num_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Token at `page_index` on the current page, if any.
    pub fn select_by_index(&self, page_index: usize) -> Option<&str> {
        self.page_tokens().get(page_index).map(|s| s.as_str())
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// Drop all tokens and reset paging.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.current_page = 0;
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::with_page_size(9)
    }
}
