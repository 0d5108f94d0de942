mod placeholder;

pub use placeholder::{PlaceholderCompiler, PLACEHOLDER_MESSAGE};
