pub mod item_list;

pub use item_list::{ItemList, StatusSummary};
