pub mod access;
pub mod vacations;
