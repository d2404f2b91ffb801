//! Application layer driving the cart on behalf of the user.
//!
//! This module defines the `CartSession`, which owns the catalog configuration
//! and the current cart, and the `Receipt` view rendered from it.

pub mod engine;
pub mod receipt;
