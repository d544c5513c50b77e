//! Headless arena runner.
//!
//! Reads commander input line by line from stdin (strategy payloads and
//! free-text commands), runs the simulation at 30Hz, and writes one JSON
//! snapshot per tick to stdout.

mod feed;
mod game_loop;

fn main() {
    env_logger::init();

    let command_rx = feed::spawn_stdin_feed();
    game_loop::run(command_rx);
}
