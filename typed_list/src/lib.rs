mod error;
mod list;

pub use error::*;
pub use list::*;

pub use type_kit::{
    type_list, CNil, Cons, Coprod, Here, Inject, Marker, Nil, Signature, Subset, SubsetEq, Tagged,
    There, TypeList,
};
