pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::{AvailableBook, BookId};
use crate::core::library::LibraryResult;

// AvailableBookRepository is the catalog port: it only answers for copies that can be held right now
#[async_trait]
pub trait AvailableBookRepository: Sync + Send {
    async fn save(&self, book: &AvailableBook) -> LibraryResult<()>;

    async fn find_available(&self, book_id: &BookId) -> LibraryResult<AvailableBook>;

    async fn remove(&self, book_id: &BookId) -> LibraryResult<()>;
}
