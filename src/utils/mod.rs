mod errors;
pub use errors::*;

mod math_helpers;
pub use math_helpers::*;
