//! Books repository: the single ordered in-memory collection

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::book::{Book, BookPayload, BookQuery, BookSummary};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List books matching the query, projected to `{id, name, publisher}`.
    ///
    /// Filters are conjunctive and applied in a fixed order: `reading`,
    /// `finished`, then `name` (case-insensitive substring). Insertion order
    /// is preserved.
    pub async fn list(&self, query: &BookQuery) -> Vec<BookSummary> {
        let reading = query.reading_filter();
        let finished = query.finished_filter();
        let name = query.name_filter();

        let books = self.books.read().await;
        books
            .iter()
            .filter(|book| reading.map_or(true, |wanted| book.reading == wanted))
            .filter(|book| finished.map_or(true, |wanted| book.finished == wanted))
            .filter(|book| {
                name.as_deref()
                    .map_or(true, |needle| book.name.to_lowercase().contains(needle))
            })
            .map(Book::summary_view)
            .collect()
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: &str) -> Option<Book> {
        let books = self.books.read().await;
        books.iter().find(|book| book.id == id).cloned()
    }

    /// Whether a book with this ID is stored
    pub async fn exists(&self, id: &str) -> bool {
        let books = self.books.read().await;
        books.iter().any(|book| book.id == id)
    }

    /// Append a book at the end of the collection
    pub async fn insert(&self, book: Book) {
        self.books.write().await.push(book);
    }

    /// Replace the client-supplied fields of a book. Returns `false` if the ID is unknown.
    pub async fn update(&self, id: &str, payload: BookPayload, now: DateTime<Utc>) -> bool {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.apply(payload, now);
                true
            }
            None => false,
        }
    }

    /// Remove a book, keeping the relative order of the rest. Returns `false` if the ID is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, name: &str, read_page: u32, page_count: u32, reading: bool) -> Book {
        Book::new(
            id.to_string(),
            BookPayload {
                name: Some(name.to_string()),
                publisher: Some(format!("{} Press", name)),
                page_count,
                read_page,
                reading,
                ..Default::default()
            },
            Utc::now(),
        )
    }

    async fn seeded() -> BooksRepository {
        let repo = BooksRepository::new();
        repo.insert(book("a", "Foobar", 10, 10, false)).await;
        repo.insert(book("b", "Dune", 5, 10, true)).await;
        repo.insert(book("c", "The FOO Files", 0, 10, true)).await;
        repo
    }

    fn ids(books: &[BookSummary]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_without_filters_keeps_insertion_order() {
        let repo = seeded().await;
        let books = repo.list(&BookQuery::default()).await;
        assert_eq!(ids(&books), vec!["a", "b", "c"]);
        assert_eq!(books[1].publisher.as_deref(), Some("Dune Press"));
    }

    #[tokio::test]
    async fn test_list_name_is_case_insensitive_substring() {
        let repo = seeded().await;
        for needle in ["foo", "FOO", "Foo"] {
            let query = BookQuery {
                name: Some(needle.to_string()),
                ..Default::default()
            };
            assert_eq!(ids(&repo.list(&query).await), vec!["a", "c"]);
        }
    }

    #[tokio::test]
    async fn test_list_flag_filters_are_conjunctive() {
        let repo = seeded().await;
        let query = BookQuery {
            reading: Some("1".to_string()),
            finished: Some("0".to_string()),
            name: Some("foo".to_string()),
        };
        assert_eq!(ids(&repo.list(&query).await), vec!["c"]);

        let finished = BookQuery {
            finished: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&repo.list(&finished).await), vec!["a"]);
    }

    #[tokio::test]
    async fn test_list_non_one_flag_means_false() {
        let repo = seeded().await;
        let query = BookQuery {
            reading: Some("true".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&repo.list(&query).await), vec!["a"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_leave_collection_unchanged() {
        let repo = seeded().await;
        assert!(!repo.update("zzz", BookPayload::default(), Utc::now()).await);
        assert!(!repo.delete("zzz").await);
        assert_eq!(repo.count().await, 3);
        assert!(repo.get_by_id("zzz").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let repo = seeded().await;
        assert!(repo.delete("b").await);
        assert!(!repo.exists("b").await);
        assert_eq!(ids(&repo.list(&BookQuery::default()).await), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_inserted_at() {
        let repo = seeded().await;
        let before = repo.get_by_id("a").await.unwrap();

        let payload = BookPayload {
            name: Some("Foobar 2".to_string()),
            page_count: 10,
            read_page: 3,
            ..Default::default()
        };
        let later = before.updated_at + chrono::Duration::seconds(5);
        assert!(repo.update("a", payload, later).await);

        let after = repo.get_by_id("a").await.unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.inserted_at, before.inserted_at);
        assert_eq!(after.updated_at, later);
        assert_eq!(after.name, "Foobar 2");
        assert!(!after.finished);
    }
}
