#[macro_use]
extern crate quick_error;

mod conf;
mod errors;

pub use self::conf::*;
pub use errors::*;
