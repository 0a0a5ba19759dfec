//! The session loop: decode -> tick -> compose -> emit, forever.
//!
//! Generic over the streams so tests can drive a whole session against
//! in-memory buffers. Production wires this to locked stdin/stdout.

use std::io::{self, Read, Write};

use crate::protocol;
use crate::sim::{self, GameState, WanderSource};

/// Run the session until the input stream ends.
///
/// Returns `Ok(())` when the peer closes the pipe cleanly on a frame
/// boundary; every other I/O failure (including EOF after a header
/// promised more key bytes) propagates as the error that ended the run.
/// Input keeps being consumed after the game is decided so the peer's
/// writes never block; each consumed frame is answered with the banner.
pub fn run<R, W, S>(
    state: &mut GameState,
    wander: &mut S,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: Read,
    W: Write,
    S: WanderSource,
{
    loop {
        let Some(moves) = protocol::read_moves(input)? else {
            log::info!("input stream closed after {} ticks", state.ticks);
            return Ok(());
        };
        sim::tick(state, moves, wander);
        let frame = sim::compose(state);
        protocol::write_frame(output, &frame)?;
    }
}
