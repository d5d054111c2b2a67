use snip_core::SnipResult;
use snip_domain::ItemList;
use snip_persistence::{persist_or_delete, ListStore, TextFileStore};

pub struct CliContext {
    pub list: ItemList,
    store: TextFileStore,
}

impl CliContext {
    pub async fn load(file_path: &str) -> SnipResult<Self> {
        let store = TextFileStore::new(file_path);
        let mut list = ItemList::new();
        if store.exists().await {
            store.load_into(&mut list).await?;
        }
        Ok(Self { list, store })
    }

    /// Write the list back per the shutdown policy: save when non-empty,
    /// delete the file when the list is empty.
    pub async fn persist(&self) -> SnipResult<()> {
        persist_or_delete(&self.store, &self.list).await
    }
}
