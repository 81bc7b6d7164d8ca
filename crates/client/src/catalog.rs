//! Cached read access to the public catalog.
//!
//! The full listing is cached with `moka` (5-minute TTL) so browsing does
//! not hammer the backend. Reads degrade to empty rather than surfacing
//! transport failures; render paths show whatever could be fetched.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, instrument, warn};

use frontier_books_core::BookId;

use crate::api::ApiClient;
use crate::api::types::Book;

const BOOKS_KEY: &str = "books";

/// Cached catalog reader.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    api: ApiClient,
    cache: Cache<String, Arc<Vec<Book>>>,
}

impl Catalog {
    /// Create a catalog reader over `api`.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogInner { api, cache }),
        }
    }

    /// List the catalog. Returns an empty list when the backend cannot be
    /// reached; failures are logged, never cached.
    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Vec<Book> {
        if let Some(books) = self.inner.cache.get(BOOKS_KEY).await {
            debug!("Cache hit for book listing");
            return (*books).clone();
        }

        match self.inner.api.list_books().await {
            Ok(books) => {
                self.inner
                    .cache
                    .insert(BOOKS_KEY.to_string(), Arc::new(books.clone()))
                    .await;
                books
            }
            Err(e) => {
                warn!("Failed to fetch books: {e}");
                Vec::new()
            }
        }
    }

    /// Resolve ids to full records.
    ///
    /// `None` means the lookup could not be served; callers with a non-empty
    /// id set must keep their current state rather than treat it as empty.
    /// An empty id set short-circuits without a request.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn book_details(&self, ids: &[BookId]) -> Option<Vec<Book>> {
        if ids.is_empty() {
            return None;
        }

        match self.inner.api.book_details(ids).await {
            Ok(books) => Some(books),
            Err(e) => {
                warn!("Failed to fetch book details: {e}");
                None
            }
        }
    }

    /// Drop every cached listing. Admin mutations call this so their edits
    /// show up on the next read.
    pub async fn invalidate(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
