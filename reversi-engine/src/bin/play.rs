//! Play a game of Reversi in the terminal. Set `RUST_LOG=debug` to see
//! rejected moves and board resets.

use reversi_engine::test_utils::play_interactive;

fn main() -> std::io::Result<()> {
    env_logger::init();
    play_interactive()
}
