//! # Domain Model
//!
//! Pure data: the records each actor owns and the DTOs used to create and change them.
//! Nothing here talks to an actor.

pub mod cart;
pub mod catalog;
pub mod order;

pub use cart::*;
pub use catalog::*;
pub use order::*;
