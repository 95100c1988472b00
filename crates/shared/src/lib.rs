pub mod cart;
pub mod recipe;

pub use cart::*;
pub use recipe::*;
