pub mod generate;
pub mod parse;
pub mod persist;
pub mod search;
pub mod types;

pub use generate::*;
pub use parse::*;
pub use persist::*;
pub use search::*;
pub use types::*;
