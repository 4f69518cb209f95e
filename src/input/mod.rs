mod reader;

pub use reader::{InputError, InputReader};
