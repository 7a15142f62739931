pub mod generate;
pub mod list;

pub use generate::*;
pub use list::*;
