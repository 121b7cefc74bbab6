mod coproduct;
mod type_list;

pub use coproduct::*;
pub use type_list::*;
