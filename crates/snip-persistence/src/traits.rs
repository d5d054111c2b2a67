use async_trait::async_trait;
use snip_core::SnipResult;
use snip_domain::ItemList;
use std::path::Path;

/// Storage backend for a snippet list.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Append the stored items onto `list`, in file order.
    ///
    /// Lines appended before a mid-stream read failure stay in place; a
    /// partial load is not rolled back.
    async fn load_into(&self, list: &mut ItemList) -> SnipResult<usize>;

    /// Write every item of `list`, in order, one per line, replacing any
    /// existing file.
    async fn save(&self, list: &ItemList) -> SnipResult<()>;

    /// Remove the stored file. A file that is already gone is not an
    /// error.
    async fn delete(&self) -> SnipResult<()>;

    /// Check if the store file exists.
    async fn exists(&self) -> bool;

    /// Get the path to the store file.
    fn path(&self) -> &Path;
}

/// Shutdown persistence policy: save when the list has items, otherwise
/// remove the file so an emptied list does not leave a stale copy behind.
pub async fn persist_or_delete(store: &dyn ListStore, list: &ItemList) -> SnipResult<()> {
    if list.is_empty() {
        store.delete().await
    } else {
        store.save(list).await
    }
}
