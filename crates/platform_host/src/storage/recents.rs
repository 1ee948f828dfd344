//! Most-recently-used file list persisted through a [`PrefsStore`].

use super::prefs::{load_pref_with, save_pref_with, PrefsStore};

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENTS: usize = 10;
/// Storage key holding the JSON array of recent paths, most recent first.
pub const RECENT_FILES_KEY: &str = "recentFiles";

/// Moves `path` to the front of `recents`, dropping duplicates and entries beyond
/// [`MAX_RECENTS`].
pub fn push_recent(mut recents: Vec<String>, path: &str) -> Vec<String> {
    recents.retain(|entry| entry != path);
    recents.insert(0, path.to_string());
    recents.truncate(MAX_RECENTS);
    recents
}

#[derive(Debug, Clone, Default)]
/// Recent files list over a durable preference store.
///
/// Order reflects when [`RecentFilesStore::add_to_recents`] was called, not file modification
/// time. Access is expected from a single UI thread; no merging happens between writers.
pub struct RecentFilesStore<S> {
    store: S,
}

impl<S: PrefsStore> RecentFilesStore<S> {
    /// Wraps a preference store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the stored list, most recent first.
    ///
    /// Missing, unreadable, or malformed state yields an empty list.
    pub async fn recent_files(&self) -> Vec<String> {
        match load_pref_with::<S, Vec<String>>(&self.store, RECENT_FILES_KEY).await {
            Ok(recents) => recents.unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Records `path` as the most recently used entry and persists the list.
    ///
    /// Returns the list as persisted.
    ///
    /// # Errors
    ///
    /// Returns an error when the store write fails; the previously stored list is left as is.
    pub async fn add_to_recents(&self, path: &str) -> Result<Vec<String>, String> {
        let recents = push_recent(self.recent_files().await, path);
        save_pref_with(&self.store, RECENT_FILES_KEY, &recents).await?;
        Ok(recents)
    }

    /// Forgets every recent entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the store delete fails.
    pub async fn clear_recents(&self) -> Result<(), String> {
        self.store.delete_pref(RECENT_FILES_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::prefs::MemoryPrefsStore;

    fn add_all(recents: &RecentFilesStore<MemoryPrefsStore>, paths: &[&str]) -> Vec<String> {
        let mut last = Vec::new();
        for path in paths {
            last = block_on(recents.add_to_recents(path)).expect("add");
        }
        last
    }

    #[test]
    fn readding_a_path_bubbles_it_to_the_front() {
        let recents = RecentFilesStore::new(MemoryPrefsStore::default());

        let list = add_all(&recents, &["/a", "/b", "/a"]);

        assert_eq!(list, vec!["/a".to_string(), "/b".to_string()]);
        assert_eq!(block_on(recents.recent_files()), list);
    }

    #[test]
    fn immediate_repeat_keeps_length() {
        let recents = RecentFilesStore::new(MemoryPrefsStore::default());
        let before = add_all(&recents, &["/x", "/y", "/z"]);

        let after = block_on(recents.add_to_recents("/z")).expect("add");

        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], "/z");
    }

    #[test]
    fn eleventh_path_evicts_the_oldest() {
        let recents = RecentFilesStore::new(MemoryPrefsStore::default());
        let paths: Vec<String> = (0..11).map(|i| format!("/file-{i}.md")).collect();
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();

        let list = add_all(&recents, &refs);

        assert_eq!(list.len(), MAX_RECENTS);
        assert_eq!(list[0], "/file-10.md");
        assert!(!list.contains(&"/file-0.md".to_string()));
    }

    #[test]
    fn list_stays_bounded_and_unique_for_mixed_sequences() {
        let mut list = Vec::new();
        for step in 0..60 {
            let path = format!("/p{}", (step * 7) % 13);
            list = push_recent(list, &path);
            assert!(list.len() <= MAX_RECENTS);
            let mut sorted = list.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
            assert_eq!(list[0], path);
        }
    }

    #[test]
    fn persisted_form_is_a_json_array_under_recent_files_key() {
        let store = MemoryPrefsStore::default();
        let recents = RecentFilesStore::new(store.clone());

        add_all(&recents, &["/a", "/b"]);

        assert_eq!(
            store.raw(RECENT_FILES_KEY),
            Some("[\"/b\",\"/a\"]".to_string())
        );
    }

    #[test]
    fn corrupt_state_reads_as_empty_and_is_replaced_on_add() {
        let store = MemoryPrefsStore::default();
        store.put_raw(RECENT_FILES_KEY, "{\"not\": \"a list\"");
        let recents = RecentFilesStore::new(store);

        assert_eq!(block_on(recents.recent_files()), Vec::<String>::new());
        assert_eq!(
            block_on(recents.add_to_recents("/fresh")).expect("add"),
            vec!["/fresh".to_string()]
        );
    }

    #[test]
    fn failed_write_is_reported_and_keeps_previous_list() {
        let store = MemoryPrefsStore::default();
        let recents = RecentFilesStore::new(store.clone());
        add_all(&recents, &["/kept"]);
        store.fail_writes_with("storage disabled");

        let err = block_on(recents.add_to_recents("/lost")).expect_err("write fails");

        assert_eq!(err, "storage disabled");
        assert_eq!(block_on(recents.recent_files()), vec!["/kept".to_string()]);
    }

    #[test]
    fn clear_forgets_everything() {
        let recents = RecentFilesStore::new(MemoryPrefsStore::default());
        add_all(&recents, &["/a", "/b"]);

        block_on(recents.clear_recents()).expect("clear");

        assert!(block_on(recents.recent_files()).is_empty());
    }
}
