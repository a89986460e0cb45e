//! Find next / find previous with a single wrap-around.
//!
//! A search starts at the current selection (the end of it going forward,
//! the start of it going backward). When the first scan comes up empty, it
//! restarts from the opposite end of the document exactly once. A second
//! miss means the text is not in the document at all.

use std::ops::Range;

use slate_buffer::TextBuffer;

/// Which way to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Matching options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A match, as a char range; `wrapped` is set when it was found only
    /// after restarting from the other end
    Found { range: Range<usize>, wrapped: bool },
    /// No match anywhere
    NotFound,
}

/// Text that can be scanned for a literal pattern.
pub trait Searchable {
    /// Total length in chars.
    fn len_chars(&self) -> usize;

    /// First match starting at or after `from`.
    fn find_forward(&self, pattern: &str, from: usize, case_sensitive: bool) -> Option<Range<usize>>;

    /// Last match starting before `before`.
    fn find_backward(&self, pattern: &str, before: usize, case_sensitive: bool) -> Option<Range<usize>>;
}

impl Searchable for TextBuffer {
    fn len_chars(&self) -> usize {
        TextBuffer::len_chars(self)
    }

    fn find_forward(&self, pattern: &str, from: usize, case_sensitive: bool) -> Option<Range<usize>> {
        TextBuffer::find_forward(self, pattern, from, case_sensitive)
    }

    fn find_backward(&self, pattern: &str, before: usize, case_sensitive: bool) -> Option<Range<usize>> {
        TextBuffer::find_backward(self, pattern, before, case_sensitive)
    }
}

/// Searches `haystack` for `query` starting from the selection `origin`.
///
/// Returns `None` for an empty query, which is a no-op.
pub fn search(
    haystack: &impl Searchable,
    query: &str,
    origin: Range<usize>,
    direction: SearchDirection,
    options: SearchOptions,
) -> Option<SearchOutcome> {
    if query.is_empty() {
        return None;
    }

    let cs = options.case_sensitive;
    let len = haystack.len_chars();
    let origin = origin.start.min(len)..origin.end.min(len);

    let first = match direction {
        SearchDirection::Forward => haystack.find_forward(query, origin.end, cs),
        SearchDirection::Backward => haystack.find_backward(query, origin.start, cs),
    };

    if let Some(range) = first {
        return Some(SearchOutcome::Found {
            range,
            wrapped: false,
        });
    }

    // Restart from the opposite end, once
    let wrapped = match direction {
        SearchDirection::Forward => haystack.find_forward(query, 0, cs),
        SearchDirection::Backward => haystack.find_backward(query, len, cs),
    };

    Some(match wrapped {
        Some(range) => SearchOutcome::Found {
            range,
            wrapped: true,
        },
        None => SearchOutcome::NotFound,
    })
}

/// The search bar's state: query, options and the last outcome.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub options: SearchOptions,
    last: Option<SearchOutcome>,
}

impl SearchState {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last.as_ref()
    }

    pub fn set_last_outcome(&mut self, outcome: SearchOutcome) {
        self.last = Some(outcome);
    }

    /// Forgets the last outcome, e.g. after the query changed.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
