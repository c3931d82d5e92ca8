//! A module containing [`LinkedList`] and associated types.
//!
//! The only other included types are for iteration, providing owned and borrowed iteration from
//! the head of a list.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;

pub use iter::*;
pub use linked_list::*;
pub(crate) use linked_list::Node;
