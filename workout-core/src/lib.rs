mod chart;
mod entry;
mod error;
pub mod pipeline;
pub mod storage;
mod store;
mod users;

pub use chart::*;
pub use entry::*;
pub use error::*;
pub use pipeline::{FilterCriteria, ListView, PageRow, PageView, DEFAULT_PAGE_LENGTH, PAGE_LENGTHS};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::*;
pub use users::*;
