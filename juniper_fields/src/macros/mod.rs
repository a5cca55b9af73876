//! Declarative macros.

#[macro_use]
mod resolver;

#[cfg(test)]
mod tests;
