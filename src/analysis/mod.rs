//! Inventory, color naming and summary analysis of placement sets

/// Color naming collaborator and the built-in brick color table
pub mod colors;
/// Per shape and per color piece counts
pub mod inventory;
/// Guide headline numbers and difficulty rating
pub mod summary;
