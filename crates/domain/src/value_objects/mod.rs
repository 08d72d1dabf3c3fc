//! Value objects and input parsing rules

mod integer_input;

pub use integer_input::parse_int_lenient;
