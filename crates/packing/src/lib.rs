//! Packing domain module.
//!
//! Items and packing lists stored through the generic repositories. Pure
//! values only (no IO, no HTTP, no storage).

pub mod item;
pub mod packing_list;

pub use item::{Item, ItemQuery};
pub use packing_list::{PackingList, PackingListQuery};
