//! Browser utilities.
//!
//! Provides:
//! - [`Dom`] - `web-sys` implementation of the intake platform traits
//! - [`file_list_to_vec`] - Ordered conversion of a `FileList`

pub mod dom;

pub use dom::{Dom, file_list_to_vec};
