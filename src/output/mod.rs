//! Output formatting

pub mod human;
