//! Domain layer: catalog data, the cart value and the pure operations on it.

pub mod cart;
pub mod catalog;
pub mod command;
pub mod money;
pub mod promotion;
