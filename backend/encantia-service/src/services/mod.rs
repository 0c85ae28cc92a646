/// Pure view helpers shared across page handlers
pub mod countdown;
pub mod dates;
pub mod navigation;
pub mod streams;
