//! Gridchase entry point
//!
//! Pure stdin/stdout coprocess: the host writes framed key input, we answer
//! each frame with a 4096-byte grid. Logging goes to stderr so it never
//! corrupts the frame stream.

use std::io;

use anyhow::Context;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use gridchase::runner;
use gridchase::sim::GameState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("session seed {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(&mut rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    runner::run(&mut state, &mut rng, &mut input, &mut output).context("session I/O failed")
}
