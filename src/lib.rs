mod date;
mod parse;

pub use crate::date::Date;
pub use crate::parse::leading_int;
