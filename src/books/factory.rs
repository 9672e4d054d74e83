use crate::books::repository::AvailableBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

pub fn create_book_repository() -> Box<dyn AvailableBookRepository> {
    Box::new(MemoryBookRepository::new())
}
