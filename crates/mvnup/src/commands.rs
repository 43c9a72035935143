pub mod compare;
pub mod filter;
pub mod next;
pub mod segments;
pub mod updates;
