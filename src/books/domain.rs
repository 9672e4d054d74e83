use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::{BookType, LibraryError};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        BookId(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        BookId(id)
    }
}

impl FromStr for BookId {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BookId(Uuid::parse_str(s)?))
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct LibraryBranchId(Uuid);

impl LibraryBranchId {
    pub fn new() -> Self {
        LibraryBranchId(Uuid::new_v4())
    }
}

impl Default for LibraryBranchId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for LibraryBranchId {
    fn from(id: Uuid) -> Self {
        LibraryBranchId(id)
    }
}

impl FromStr for LibraryBranchId {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LibraryBranchId(Uuid::parse_str(s)?))
    }
}

impl Display for LibraryBranchId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// AvailableBook is a copy the catalog reports as currently free to be held
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AvailableBook {
    book_id: BookId,
    book_type: BookType,
    library_branch: LibraryBranchId,
}

impl AvailableBook {
    pub fn new(book_id: BookId, book_type: BookType, library_branch: LibraryBranchId) -> Self {
        Self {
            book_id,
            book_type,
            library_branch,
        }
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn book_type(&self) -> BookType {
        self.book_type
    }

    pub fn library_branch(&self) -> LibraryBranchId {
        self.library_branch
    }

    pub fn is_restricted(&self) -> bool {
        self.book_type == BookType::Restricted
    }
}
