use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::{AvailableBook, BookId};
use crate::books::repository::AvailableBookRepository;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<BookId, AvailableBook>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailableBookRepository for MemoryBookRepository {
    async fn save(&self, book: &AvailableBook) -> LibraryResult<()> {
        self.books.write().await.insert(book.book_id(), book.clone());
        Ok(())
    }

    async fn find_available(&self, book_id: &BookId) -> LibraryResult<AvailableBook> {
        self.books.read().await.get(book_id).cloned().ok_or_else(|| {
            LibraryError::not_found(format!("available book with id {} not found", book_id).as_str())
        })
    }

    async fn remove(&self, book_id: &BookId) -> LibraryResult<()> {
        self.books.write().await.remove(book_id).map(|_| ()).ok_or_else(|| {
            LibraryError::not_found(format!("available book with id {} not found", book_id).as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::{AvailableBook, BookId, LibraryBranchId};
    use crate::books::repository::AvailableBookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::{BookType, LibraryError};

    #[tokio::test]
    async fn test_should_save_and_find_book() {
        let repo = MemoryBookRepository::new();
        let book = AvailableBook::new(BookId::new(), BookType::Circulating, LibraryBranchId::new());
        repo.save(&book).await.expect("should save");
        let loaded = repo.find_available(&book.book_id()).await.expect("should find");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_not_find_removed_book() {
        let repo = MemoryBookRepository::new();
        let book = AvailableBook::new(BookId::new(), BookType::Restricted, LibraryBranchId::new());
        repo.save(&book).await.expect("should save");
        repo.remove(&book.book_id()).await.expect("should remove");
        let res = repo.find_available(&book.book_id()).await;
        assert!(matches!(res, Err(LibraryError::NotFound{ message: _ })));
        assert!(repo.remove(&book.book_id()).await.is_err());
    }
}
