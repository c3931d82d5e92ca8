//! Linked collection types. Currently only the singly linked [`LinkedList`], which hash tables use
//! as the per-slot chain for separate chaining.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
