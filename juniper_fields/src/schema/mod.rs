pub mod meta;
pub mod registry;
