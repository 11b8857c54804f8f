//! Interactive play at the terminal

mod console;

pub use console::ConsoleSolver;
