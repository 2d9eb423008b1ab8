pub mod element;
pub mod floyd_cycle;
pub mod list_node;
pub mod median;

pub use element::{Element, Value};
pub use floyd_cycle::{find_cycle_start, has_cycle, Shape};
pub use list_node::{cycle_list, Link, ListNode, NodeRef};
pub use median::median_of_sorted;
