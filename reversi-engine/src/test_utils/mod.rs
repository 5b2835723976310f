//! Utilities used for testing, benchmarking, and manual play.

mod perft;
pub use perft::run_perft;

mod play;
pub use play::play_interactive;
