pub mod alphabet;
pub mod consts;
pub mod directory;
pub mod errors;
pub mod paging;
pub mod store;

pub use alphabet::{AlphabetBucket, AlphabetIndex};
pub use directory::{AllNames, AlphabetSummary, DirectoryHandle, UserDirectory};
pub use errors::{Result, UserListError};
pub use paging::{Page, PageLimits, PageRequest, PageResult, SearchRequest};
pub use store::{NameRecord, NameStore};
