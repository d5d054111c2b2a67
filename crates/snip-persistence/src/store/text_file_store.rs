use crate::traits::ListStore;
use async_trait::async_trait;
use snip_core::SnipResult;
use snip_domain::ItemList;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Newline-delimited text file store: one item per line, UTF-8, no
/// escaping, order = list order, no header or footer.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ListStore for TextFileStore {
    async fn load_into(&self, list: &mut ItemList) -> SnipResult<usize> {
        let file = File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();
        let mut appended = 0;

        // Stream line by line; whatever was appended before an error
        // stays in the list.
        while let Some(line) = lines.next_line().await? {
            if list.append_loaded_line(&line) {
                appended += 1;
            }
        }

        tracing::info!("Loaded {} items from {}", appended, self.path.display());
        Ok(appended)
    }

    async fn save(&self, list: &ItemList) -> SnipResult<()> {
        let mut contents = String::new();
        for item in list.items() {
            contents.push_str(item);
            contents.push('\n');
        }

        // Temp file in the same directory so the rename stays on one
        // filesystem.
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();
        fs::write(&temp_path, contents.as_bytes()).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::info!("Saved {} items to {}", list.len(), self.path.display());
        Ok(())
    }

    async fn delete(&self) -> SnipResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!("Removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::persist_or_delete;
    use tempfile::tempdir;

    fn list_of(items: &[&str]) -> ItemList {
        let mut list = ItemList::new();
        for item in items {
            list.add(item).unwrap();
        }
        list
    }

    #[tokio::test]
    async fn save_writes_one_item_per_line() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("list.txt");
        let store = TextFileStore::new(&file_path);

        store.save(&list_of(&["alpha", "beta"])).await.unwrap();

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(contents, "alpha\nbeta\n");
    }

    #[tokio::test]
    async fn save_then_load_round_trips_exactly() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("list.txt"));

        let original = list_of(&["alpha", "beta", "gamma"]);
        store.save(&original).await.unwrap();

        let mut loaded = ItemList::new();
        let count = store.load_into(&mut loaded).await.unwrap();
        assert_eq!(count, 3);
        assert_eq!(loaded.items(), original.items());
    }

    #[tokio::test]
    async fn save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("list.txt");
        let store = TextFileStore::new(&file_path);

        store.save(&list_of(&["first"])).await.unwrap();
        store.save(&list_of(&["second"])).await.unwrap();

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(contents, "second\n");
    }

    #[tokio::test]
    async fn load_drops_blank_lines_and_trims() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("list.txt");
        std::fs::write(&file_path, "  alpha  \n\n   \nbeta\n").unwrap();

        let store = TextFileStore::new(&file_path);
        let mut list = ItemList::new();
        let count = store.load_into(&mut list).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(list.items(), ["alpha", "beta"]);
    }

    #[tokio::test]
    async fn load_appends_without_deduplication() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("list.txt");
        std::fs::write(&file_path, "alpha\nbeta\n").unwrap();

        let store = TextFileStore::new(&file_path);
        let mut list = list_of(&["alpha"]);
        store.load_into(&mut list).await.unwrap();
        assert_eq!(list.items(), ["alpha", "alpha", "beta"]);
    }

    #[tokio::test]
    async fn load_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("absent.txt"));

        let mut list = ItemList::new();
        assert!(store.load_into(&mut list).await.is_err());
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn delete_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("absent.txt"));
        store.delete().await.unwrap();
    }

    #[tokio::test]
    async fn persist_or_delete_removes_file_for_empty_list() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("list.txt");
        std::fs::write(&file_path, "stale\n").unwrap();

        let store = TextFileStore::new(&file_path);
        persist_or_delete(&store, &ItemList::new()).await.unwrap();
        assert!(!file_path.exists());
    }

    #[tokio::test]
    async fn persist_or_delete_saves_non_empty_list() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("list.txt");

        let store = TextFileStore::new(&file_path);
        persist_or_delete(&store, &list_of(&["alpha"])).await.unwrap();

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(contents, "alpha\n");
    }
}
