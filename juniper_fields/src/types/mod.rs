pub mod base;
pub mod containers;
pub mod pointers;
pub mod scalars;
