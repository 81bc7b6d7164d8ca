//! Administrative table maintenance.
//!
//! The client sends admin requests for any signed-in session; the backend
//! decides whether the account is actually allowed to perform them.

use serde_json::Value;
use tracing::warn;

use crate::api::types::{AdminTable, NewBook};
use crate::surface::ConfirmRequest;

use super::Context;

/// Result of an admin mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutateOutcome {
    /// The backend applied the change.
    Done,
    NotSignedIn,
    /// The user declined the confirmation dialog.
    Declined,
    /// The backend rejected the change or could not be reached.
    Failed,
}

impl Context {
    /// Fetch every row of `table`. `None` means no usable session.
    ///
    /// Transport failures degrade to an empty list with an error
    /// notification.
    ///
    /// # Errors
    ///
    /// This flow never constructs an error today; the signature matches the
    /// other gated flows.
    pub async fn admin_rows(&mut self, table: AdminTable) -> crate::Result<Option<Vec<Value>>> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(None);
        };

        match self.api.admin_table(&token, table).await {
            Ok(rows) => {
                self.surface.notify("Loaded Data");
                Ok(Some(rows))
            }
            Err(e) => {
                warn!("Failed to fetch {table} rows: {e}");
                self.surface.notify("Error");
                Ok(Some(Vec::new()))
            }
        }
    }

    /// Add a book to the catalog and invalidate the cached listing.
    ///
    /// # Errors
    ///
    /// This flow reports backend failures through [`MutateOutcome::Failed`];
    /// `Err` is never constructed today.
    pub async fn add_book(&mut self, book: &NewBook) -> crate::Result<MutateOutcome> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(MutateOutcome::NotSignedIn);
        };

        self.surface.notify("Adding...");
        match self.api.create_book(&token, book).await {
            Ok(()) => {
                self.catalog.invalidate().await;
                self.surface.notify("Added!");
                Ok(MutateOutcome::Done)
            }
            Err(e) => {
                warn!("Failed to add book: {e}");
                self.surface.notify("Error!");
                Ok(MutateOutcome::Failed)
            }
        }
    }

    /// Overwrite columns of one row and invalidate the cached listing.
    ///
    /// # Errors
    ///
    /// This flow reports backend failures through [`MutateOutcome::Failed`];
    /// `Err` is never constructed today.
    pub async fn update_row(
        &mut self,
        table: AdminTable,
        id: i64,
        fields: &Value,
    ) -> crate::Result<MutateOutcome> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(MutateOutcome::NotSignedIn);
        };

        self.surface.notify("Saving...");
        match self.api.update_record(&token, table, id, fields).await {
            Ok(()) => {
                self.catalog.invalidate().await;
                self.surface.notify("Saved.");
                Ok(MutateOutcome::Done)
            }
            Err(e) => {
                warn!("Failed to update {table} row {id}: {e}");
                self.surface.notify("Error");
                Ok(MutateOutcome::Failed)
            }
        }
    }

    /// Delete one row after confirmation, then invalidate the cached
    /// listing.
    ///
    /// # Errors
    ///
    /// This flow reports backend failures through [`MutateOutcome::Failed`];
    /// `Err` is never constructed today.
    pub async fn delete_row(&mut self, table: AdminTable, id: i64) -> crate::Result<MutateOutcome> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(MutateOutcome::NotSignedIn);
        };

        let request = ConfirmRequest::new(
            "Permanently Delete Entry?",
            "This action cannot be undone. Are you sure you want to delete this entry?",
        );
        if !self.surface.confirm(&request) {
            return Ok(MutateOutcome::Declined);
        }

        self.surface.notify("Deleting...");
        match self.api.delete_record(&token, table, id).await {
            Ok(()) => {
                self.catalog.invalidate().await;
                self.surface.notify("Deleted.");
                Ok(MutateOutcome::Done)
            }
            Err(e) => {
                warn!("Failed to delete {table} row {id}: {e}");
                self.surface.notify("Error");
                Ok(MutateOutcome::Failed)
            }
        }
    }
}
