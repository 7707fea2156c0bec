use crate::error::RecipeError;
use crate::store::KeyValueStore;
use log::debug;
use serde::{Deserialize, Serialize};

const LIKES_KEY: &str = "likes";

/// A bookmarked recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Liked recipes, written through to a [`KeyValueStore`] on every change.
#[derive(Debug)]
pub struct Likes<S: KeyValueStore> {
    store: S,
    likes: Vec<Like>,
}

impl<S: KeyValueStore> Likes<S> {
    /// Starts empty; call [`Likes::read_storage`] to restore saved likes.
    pub fn new(store: S) -> Self {
        Self {
            store,
            likes: Vec::new(),
        }
    }

    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Result<&Like, RecipeError> {
        let mut next = self.likes.clone();
        next.push(Like {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            img: img.into(),
        });
        self.commit(next)?;
        Ok(&self.likes[self.likes.len() - 1])
    }

    /// Unknown ids are ignored.
    pub fn delete_like(&mut self, id: &str) -> Result<Option<Like>, RecipeError> {
        let Some(index) = self.likes.iter().position(|like| like.id == id) else {
            return Ok(None);
        };
        let mut next = self.likes.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(Some(removed))
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    /// Memory only takes `next` once the store has accepted it.
    fn commit(&mut self, next: Vec<Like>) -> Result<(), RecipeError> {
        let bytes = serde_json::to_vec(&next)?;
        self.store.set(LIKES_KEY, &bytes)?;
        self.likes = next;
        Ok(())
    }

    /// Replace the in-memory likes with what the store holds. A missing
    /// entry leaves the list untouched.
    pub fn read_storage(&mut self) -> Result<(), RecipeError> {
        if let Some(bytes) = self.store.get(LIKES_KEY)? {
            self.likes = serde_json::from_slice(&bytes)?;
            debug!("Restored {} liked recipes", self.likes.len());
        }
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_add_and_delete() {
        let mut likes = Likes::new(MemoryStore::new());
        likes.add_like("1", "Pizza", "Closet Cooking", "img.jpg").unwrap();
        assert!(likes.is_liked("1"));
        assert_eq!(likes.num_likes(), 1);

        let removed = likes.delete_like("1").unwrap().unwrap();
        assert_eq!(removed.title, "Pizza");
        assert!(!likes.is_liked("1"));
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut likes = Likes::new(MemoryStore::new());
        likes.add_like("1", "Pizza", "", "").unwrap();
        assert!(likes.delete_like("2").unwrap().is_none());
        assert_eq!(likes.num_likes(), 1);
    }

    #[test]
    fn test_persists_through_store() {
        let mut likes = Likes::new(MemoryStore::new());
        likes.add_like("1", "Pizza", "Closet Cooking", "img.jpg").unwrap();
        likes.add_like("2", "Pasta", "Two Peas", "pasta.jpg").unwrap();
        let store = likes.into_store();

        let mut restored = Likes::new(store);
        assert_eq!(restored.num_likes(), 0);
        restored.read_storage().unwrap();
        assert_eq!(restored.num_likes(), 2);
        assert_eq!(restored.likes()[1].author, "Two Peas");
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, RecipeError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), RecipeError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn test_failed_write_leaves_likes_unchanged() {
        let mut likes = Likes::new(ReadOnlyStore);
        assert!(matches!(
            likes.add_like("1", "Pizza", "", ""),
            Err(RecipeError::StorageError(_))
        ));
        assert!(!likes.is_liked("1"));
        assert_eq!(likes.num_likes(), 0);
    }

    #[test]
    fn test_failed_delete_keeps_like() {
        let mut likes = Likes {
            store: ReadOnlyStore,
            likes: vec![Like {
                id: "1".to_string(),
                title: "Pizza".to_string(),
                author: String::new(),
                img: String::new(),
            }],
        };

        assert!(likes.delete_like("1").is_err());
        assert!(likes.is_liked("1"));
    }

    #[test]
    fn test_corrupt_storage_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(LIKES_KEY, b"not json").unwrap();
        let mut likes = Likes::new(store);
        assert!(matches!(
            likes.read_storage(),
            Err(RecipeError::SerializationError(_))
        ));
    }
}
