#![warn(clippy::pedantic)]

pub mod arrays;
pub mod digits;
pub mod linked_list;
pub mod strings;
