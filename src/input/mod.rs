//! Resume text extraction for the command-line caller
//! The scoring engine itself never touches files.

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
