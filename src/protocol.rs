//! Wire codec for the host pipe
//!
//! Input: `[4-byte big-endian length N][N key bytes]` per tick. Key bytes
//! outside the move mapping are dropped; duplicates collapse into one move.
//! Output: exactly 4096 raw bytes per frame, row-major, no framing - the
//! peer knows the fixed size out-of-band.
//!
//! Reads are exact: a header promising bytes the stream cannot supply is an
//! I/O error, never a partial-frame carryover. The one non-error ending is
//! the stream closing on a frame boundary, before any header byte.

use std::io::{self, Read, Write};

use crate::sim::{Grid, Move, MoveSet};

/// Decode one input frame into the set of distinct moves it carries.
///
/// Blocks until the full frame arrives. Returns `Ok(None)` when the stream
/// ends before the first header byte (the peer hung up between frames);
/// any other short read surfaces as the underlying `io::Error`.
pub fn read_moves<R: Read>(input: &mut R) -> io::Result<Option<MoveSet>> {
    let mut header = [0u8; 4];
    let mut filled = 0;
    while filled < header.len() {
        match input.read(&mut header[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(io::ErrorKind::UnexpectedEof.into()),
            Ok(n) => filled += n,
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    let len = u32::from_be_bytes(header) as usize;

    let mut moves = MoveSet::EMPTY;
    if len == 0 {
        return Ok(Some(moves));
    }

    let mut keys = vec![0u8; len];
    input.read_exact(&mut keys)?;
    for key in keys {
        if let Some(mv) = Move::from_byte(key) {
            moves.insert(mv);
        }
    }
    Ok(Some(moves))
}

/// Encode one frame: 4096 bytes row-major, flushed immediately.
pub fn write_frame<W: Write>(output: &mut W, frame: &Grid) -> io::Result<()> {
    for row in frame.rows() {
        output.write_all(row)?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRAME_BYTES, GRID_SIZE};
    use crate::sim::Pos;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn frame_of(bytes: &[u8]) -> Vec<u8> {
        let mut buf = (bytes.len() as u32).to_be_bytes().to_vec();
        buf.extend_from_slice(bytes);
        buf
    }

    #[test]
    fn test_zero_length_frame_decodes_empty() {
        let mut input = Cursor::new(frame_of(&[]));
        let moves = read_moves(&mut input).unwrap().unwrap();
        assert_eq!(moves, MoveSet::EMPTY);
    }

    #[test]
    fn test_keys_decode_and_duplicates_collapse() {
        let mut input = Cursor::new(frame_of(&[1, 4, 4, 1]));
        let moves = read_moves(&mut input).unwrap().unwrap();
        assert!(moves.contains(Move::Up));
        assert!(moves.contains(Move::Right));
        assert_eq!(moves.iter().count(), 2);
    }

    #[test]
    fn test_unknown_key_bytes_are_dropped() {
        let mut input = Cursor::new(frame_of(&[0, 9, 2, 200, 255]));
        let moves = read_moves(&mut input).unwrap().unwrap();
        assert!(moves.contains(Move::Down));
        assert_eq!(moves.iter().count(), 1);
    }

    #[test]
    fn test_consecutive_frames_share_a_stream() {
        let mut buf = frame_of(&[1]);
        buf.extend(frame_of(&[2]));
        let mut input = Cursor::new(buf);
        assert!(read_moves(&mut input).unwrap().unwrap().contains(Move::Up));
        assert!(read_moves(&mut input).unwrap().unwrap().contains(Move::Down));
        // Third read finds the stream closed on a frame boundary
        assert!(read_moves(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_eof_before_header_is_a_clean_close() {
        let mut input = Cursor::new(Vec::new());
        assert!(read_moves(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let mut input = Cursor::new(vec![0u8, 0]);
        let err = read_moves(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_header_promising_missing_bytes_is_an_error() {
        let mut buf = 5u32.to_be_bytes().to_vec();
        buf.extend([1, 2]); // only 2 of the promised 5
        let mut input = Cursor::new(buf);
        let err = read_moves(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_frame_encodes_row_major_and_exact_size() {
        let mut grid = Grid::zeroed();
        grid[Pos::new(0, 1)] = 11;
        grid[Pos::new(1, 0)] = 22;
        let mut out = Vec::new();
        write_frame(&mut out, &grid).unwrap();
        assert_eq!(out.len(), FRAME_BYTES);
        assert_eq!(out[1], 11);
        assert_eq!(out[GRID_SIZE], 22);
    }

    proptest! {
        /// Arbitrary key garbage never errors and never yields moves
        /// outside the four-byte mapping.
        #[test]
        fn prop_decode_is_total_over_key_bytes(keys in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut input = Cursor::new(frame_of(&keys));
            let moves = read_moves(&mut input).unwrap().unwrap();
            for mv in Move::ALL {
                prop_assert_eq!(moves.contains(mv), keys.contains(&(mv as u8)));
            }
        }
    }
}
