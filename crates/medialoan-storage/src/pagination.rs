//! Page-safe bulk reads.
//!
//! Backends cap result sets at a page boundary; a query that quietly comes
//! back with exactly one page's worth of rows has almost certainly been
//! truncated. Bulk tables go through `fetch_all_pages`, which accumulates
//! every page; small-table reads assert `verify_no_truncation` instead.

use crate::error::{Result, StorageError};
use std::future::Future;

pub const DEFAULT_PAGE_SIZE: i64 = 1000;

/// Fetch every page of a bulk read. `fetch_page(limit, offset)` must honor
/// both parameters and order by a stable key.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(i64, i64) -> Fut,
    Fut: Future<Output = std::result::Result<Vec<T>, sqlx::Error>>,
{
    let mut rows = Vec::new();
    let mut offset = 0i64;
    loop {
        let page = fetch_page(DEFAULT_PAGE_SIZE, offset).await?;
        let page_len = page.len() as i64;
        rows.extend(page);
        if page_len < DEFAULT_PAGE_SIZE {
            break;
        }
        offset += DEFAULT_PAGE_SIZE;
    }
    Ok(rows)
}

/// Defensive check for non-paged reads: fail loudly rather than schedule
/// against a silently incomplete table.
pub fn verify_no_truncation(len: usize, table: &'static str) -> Result<()> {
    if len == DEFAULT_PAGE_SIZE as usize {
        return Err(StorageError::SuspectTruncation { table, rows: len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accumulates_every_page() {
        let total = 2500usize;
        let rows = fetch_all_pages(|limit, offset| async move {
            let start = offset as usize;
            let end = (start + limit as usize).min(total);
            Ok::<_, sqlx::Error>((start..end).collect::<Vec<usize>>())
        })
        .await
        .unwrap();

        assert_eq!(rows.len(), total);
        assert_eq!(rows[0], 0);
        assert_eq!(rows[total - 1], total - 1);
    }

    #[tokio::test]
    async fn exact_page_multiple_terminates() {
        let total = 2000usize;
        let rows = fetch_all_pages(|limit, offset| async move {
            let start = offset as usize;
            let end = (start + limit as usize).min(total);
            Ok::<_, sqlx::Error>((start..end).collect::<Vec<usize>>())
        })
        .await
        .unwrap();

        assert_eq!(rows.len(), total);
    }

    #[test]
    fn truncation_guard_fires_on_exact_page() {
        assert!(verify_no_truncation(999, "rules").is_ok());
        assert!(verify_no_truncation(1001, "rules").is_ok());

        let err = verify_no_truncation(1000, "rules").unwrap_err();
        assert!(matches!(
            err,
            StorageError::SuspectTruncation { table: "rules", rows: 1000 }
        ));
    }
}
