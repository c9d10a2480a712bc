//! Page index / page size state.
//!
//! Out-of-range input is clamped, never rejected: the table must stay usable
//! while the match count moves under it (e.g. right after a filter narrows the
//! result set).

use core::num::NonZeroUsize;
use core::ops::Range;

use serde::{Deserialize, Serialize};

use stockboard_core::ValueObject;

/// A positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(match NonZeroUsize::new(8) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// `None` for zero.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    /// Zero becomes one.
    pub fn clamped(n: usize) -> Self {
        Self(NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ValueObject for PageSize {}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::new(value).ok_or_else(|| "page size must be at least 1".to_string())
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// `ceil(total_matches / page_size)`; zero matches means zero pages.
pub fn total_pages(total_matches: usize, page_size: PageSize) -> usize {
    total_matches.div_ceil(page_size.get())
}

/// Current page position.
///
/// Every mutator takes the current match count so the index can be kept in
/// `[0, total_pages - 1]` (or at 0 when there are no matches). Mutators
/// return whether the observable state changed. A deserialized state may
/// carry any index; it is brought into range by the first call that sees a
/// match count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    page_index: usize,
    page_size: PageSize,
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_pages(&self, total_matches: usize) -> usize {
        total_pages(total_matches, self.page_size)
    }

    /// Last valid index; an empty result still has page 0.
    pub fn last_index(&self, total_matches: usize) -> usize {
        self.total_pages(total_matches).saturating_sub(1)
    }

    pub fn set_page_index(&mut self, index: usize, total_matches: usize) -> bool {
        let last = self.last_index(total_matches);
        let clamped = index.min(last);
        if clamped != index {
            tracing::debug!(requested = index, clamped, "page index out of range, clamping");
        }
        self.replace_index(clamped)
    }

    /// Change the page size, keeping the index on the last valid page if it
    /// would otherwise fall off the end. Zero is treated as one.
    pub fn set_page_size(&mut self, size: usize, total_matches: usize) -> bool {
        let page_size = match PageSize::new(size) {
            Some(size) => size,
            None => {
                tracing::debug!("page size 0 requested, clamping to 1");
                PageSize::clamped(size)
            }
        };

        let size_changed = page_size != self.page_size;
        self.page_size = page_size;
        let index_changed = self.clamp(total_matches);
        size_changed || index_changed
    }

    /// Pull the index back into range after the match count changed.
    pub fn clamp(&mut self, total_matches: usize) -> bool {
        let last = self.last_index(total_matches);
        if self.page_index > last {
            tracing::debug!(
                from = self.page_index,
                to = last,
                total_matches,
                "re-clamping page index"
            );
        }
        self.replace_index(self.page_index.min(last))
    }

    pub fn first(&mut self) -> bool {
        self.replace_index(0)
    }

    pub fn previous(&mut self) -> bool {
        self.replace_index(self.page_index.saturating_sub(1))
    }

    pub fn next(&mut self, total_matches: usize) -> bool {
        let last = self.last_index(total_matches);
        self.replace_index(self.page_index.saturating_add(1).min(last))
    }

    pub fn last(&mut self, total_matches: usize) -> bool {
        let last = self.last_index(total_matches);
        self.replace_index(last)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total_matches: usize) -> bool {
        self.page_index < self.last_index(total_matches)
    }

    /// Indices into the match list covered by the current page.
    pub fn range(&self, total_matches: usize) -> Range<usize> {
        let index = self.page_index.min(self.last_index(total_matches));
        let start = (index * self.page_size.get()).min(total_matches);
        let end = start.saturating_add(self.page_size.get()).min(total_matches);
        start..end
    }

    pub fn page_info(&self, total_matches: usize) -> PageInfo {
        let range = self.range(total_matches);
        let (first_item, last_item) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        PageInfo {
            page_index: self.page_index.min(self.last_index(total_matches)),
            page_size: self.page_size.get(),
            total_pages: self.total_pages(total_matches),
            total_matches,
            first_item,
            last_item,
        }
    }

    fn replace_index(&mut self, index: usize) -> bool {
        if self.page_index == index {
            return false;
        }
        self.page_index = index;
        true
    }
}

/// Summary for a "showing x-y of n" footer. Item positions are 1-based;
/// both are 0 when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub first_item: usize,
    pub last_item: usize,
}
