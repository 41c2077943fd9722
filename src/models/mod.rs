pub mod balance;
pub mod transaction;
pub mod view;

pub use balance::*;
pub use transaction::*;
pub use view::*;
