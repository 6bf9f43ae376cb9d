pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::{MazePathApp, MazeSource};
pub use args::{AlgorithmChoice, Args};
pub use search::run_searches;
pub use utils::{format_number, parse_cell};
