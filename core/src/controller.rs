//! View-model controller for the grocery list.
//!
//! # Design
//! `GroceryController` is the single entry point for state changes. It owns
//! the local snapshot plus the pending UI state (new-item text, edit surface)
//! as plain fields so a rendering surface only has to read them and call the
//! commands below.
//!
//! Every mutation is one remote call followed, only on success, by a full
//! `refresh()`. The collection returned by the mutation itself is discarded;
//! the snapshot is never patched locally. A failed call leaves the snapshot
//! and the pending state exactly as they were, so the user can retry.

use std::sync::Arc;

use tracing::debug;

use crate::error::ApiError;
use crate::remote::RemoteStore;
use crate::transport::Transport;
use crate::types::{GroceryItem, GroceryItemPatch, NewGroceryItem};

/// The item currently being renamed and its unsaved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub id: u64,
    pub draft_name: String,
}

/// State of the rename surface.
///
/// `Closed --begin_edit(found)--> Open --submit_edit(ok)--> Closed`, and
/// `Open --cancel_edit--> Closed`. Nothing else moves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSurface {
    #[default]
    Closed,
    Open(EditTarget),
}

impl EditSurface {
    pub fn is_open(&self) -> bool {
        matches!(self, EditSurface::Open(_))
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            EditSurface::Open(target) => Some(target),
            EditSurface::Closed => None,
        }
    }
}

pub struct GroceryController<T> {
    store: RemoteStore<T>,
    snapshot: Option<Arc<[GroceryItem]>>,
    new_item_name: String,
    edit: EditSurface,
}

impl<T: Transport> GroceryController<T> {
    pub fn new(store: RemoteStore<T>) -> Self {
        Self {
            store,
            snapshot: None,
            new_item_name: String::new(),
            edit: EditSurface::Closed,
        }
    }

    /// The current snapshot, or `None` before the first successful refresh.
    ///
    /// Each refresh installs a new `Arc`, so `Arc::ptr_eq` tells a consumer
    /// whether it needs to re-render.
    pub fn snapshot(&self) -> Option<Arc<[GroceryItem]>> {
        self.snapshot.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The snapshot as a slice; empty when not yet loaded.
    pub fn items(&self) -> &[GroceryItem] {
        self.snapshot.as_deref().unwrap_or(&[])
    }

    pub fn item(&self, id: u64) -> Option<&GroceryItem> {
        self.items().iter().find(|item| item.id == id)
    }

    pub fn new_item_name(&self) -> &str {
        &self.new_item_name
    }

    pub fn set_new_item_name(&mut self, name: impl Into<String>) {
        self.new_item_name = name.into();
    }

    pub fn edit_surface(&self) -> &EditSurface {
        &self.edit
    }

    /// Fetch the whole list and replace the snapshot.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        let items = self.store.list()?;
        debug!(count = items.len(), "snapshot refreshed");
        self.snapshot = Some(items.into());
        Ok(())
    }

    pub fn add_item(&mut self, name: &str) -> Result<(), ApiError> {
        if name.is_empty() {
            return Err(ApiError::EmptyName);
        }
        self.store.create(&NewGroceryItem::named(name))?;
        self.refresh()?;
        self.new_item_name.clear();
        Ok(())
    }

    /// Add an item named after the pending new-item text.
    pub fn submit_new_item(&mut self) -> Result<(), ApiError> {
        let name = self.new_item_name.clone();
        self.add_item(&name)
    }

    pub fn toggle_bought(&mut self, id: u64, bought: bool) -> Result<(), ApiError> {
        self.update_and_refresh(id, GroceryItemPatch::bought(bought))
    }

    pub fn increment_amount(&mut self, id: u64, current_amount: u32) -> Result<(), ApiError> {
        self.update_and_refresh(id, GroceryItemPatch::amount(current_amount.saturating_add(1)))
    }

    /// Decrement the amount, deleting the item instead once it would drop
    /// below one.
    pub fn decrement_amount(&mut self, id: u64, current_amount: u32) -> Result<(), ApiError> {
        if current_amount <= 1 {
            return self.delete_item(id);
        }
        self.update_and_refresh(id, GroceryItemPatch::amount(current_amount - 1))
    }

    pub fn delete_item(&mut self, id: u64) -> Result<(), ApiError> {
        self.store.delete(id)?;
        self.refresh()
    }

    /// Open the rename surface for `id`. An id missing from the snapshot is
    /// ignored.
    pub fn begin_edit(&mut self, id: u64) {
        let Some(item) = self.item(id) else {
            debug!(id, "edit target not in snapshot");
            return;
        };
        self.edit = EditSurface::Open(EditTarget {
            id,
            draft_name: item.name.clone(),
        });
    }

    /// Replace the draft name. Does nothing while the surface is closed.
    pub fn set_edit_draft(&mut self, name: impl Into<String>) {
        if let EditSurface::Open(target) = &mut self.edit {
            target.draft_name = name.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditSurface::Closed;
    }

    /// Save the draft name of the open edit target. An empty draft is
    /// rejected and the surface stays open.
    pub fn submit_edit(&mut self) -> Result<(), ApiError> {
        let target = self.edit.target().cloned().ok_or(ApiError::NoEditTarget)?;
        if target.draft_name.is_empty() {
            return Err(ApiError::EmptyName);
        }
        self.update_and_refresh(target.id, GroceryItemPatch::name(&target.draft_name))?;
        self.edit = EditSurface::Closed;
        Ok(())
    }

    fn update_and_refresh(&mut self, id: u64, patch: GroceryItemPatch) -> Result<(), ApiError> {
        self.store.update(id, &patch)?;
        self.refresh()
    }
}
