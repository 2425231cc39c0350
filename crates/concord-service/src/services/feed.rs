//! Feed page assembly - the pure half of the paginated feed reader
//!
//! The repository returns up to one page of newest-first rows; this module
//! decides the `next_cursor`. The contract:
//!
//! - a full page advertises the id of its last item as the cursor for the
//!   next (older) page;
//! - a short page advertises nothing, ending pagination.
//!
//! "Full page" is a maybe-more heuristic, not an exact count: when the total
//! is an exact multiple of the page size the client makes one final empty
//! fetch. Accepted behavior, documented here rather than papered over.

use concord_core::Snowflake;

/// One assembled feed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<Snowflake>,
}

impl<T> FeedPage<T> {
    /// Assemble a page from repository rows.
    ///
    /// `id_of` extracts the cursor id from an item; it is only consulted for
    /// the last item of a full page.
    pub fn assemble(items: Vec<T>, page_size: i64, id_of: impl Fn(&T) -> Snowflake) -> Self {
        let next_cursor = if items.len() as i64 == page_size {
            items.last().map(&id_of)
        } else {
            None
        };

        Self { items, next_cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[i64], page_size: i64) -> FeedPage<i64> {
        FeedPage::assemble(ids.to_vec(), page_size, |id| Snowflake::new(*id))
    }

    #[test]
    fn test_full_page_advertises_last_id() {
        let result = page(&[30, 29, 28, 27, 26, 25, 24, 23, 22, 21], 10);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.next_cursor, Some(Snowflake::new(21)));
    }

    #[test]
    fn test_short_page_ends_pagination() {
        let result = page(&[5, 4, 3], 10);
        assert_eq!(result.next_cursor, None);
    }

    #[test]
    fn test_empty_page_ends_pagination() {
        let result = page(&[], 10);
        assert!(result.items.is_empty());
        assert_eq!(result.next_cursor, None);
    }

    #[test]
    fn test_exact_multiple_costs_one_trailing_fetch() {
        // 20 items, page size 10: the second page is full, so it still
        // advertises a cursor; the third fetch comes back empty.
        let second = page(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1], 10);
        assert_eq!(second.next_cursor, Some(Snowflake::new(1)));

        let third = page(&[], 10);
        assert_eq!(third.next_cursor, None);
    }

    #[test]
    fn test_page_size_is_configuration() {
        let result = page(&[3, 2, 1], 3);
        assert_eq!(result.next_cursor, Some(Snowflake::new(1)));

        let result = page(&[3, 2, 1], 5);
        assert_eq!(result.next_cursor, None);
    }
}
