pub mod auth;
pub mod dump;
pub mod poll;
pub mod read;
pub mod write;

// Re-export the operations at this root so callers can use
// `crate::card::operations::read_block(...)` directly.
pub use auth::authenticate_block;
pub use dump::{dump, BlockFailure, CardDump};
pub use poll::wait_for_target;
pub use read::{read_block, read_block_with_key};
pub use write::{write_block, write_block_with_key};

use crate::constants::BLOCK_COUNT_1K;
use crate::{Error, Result};

// Bounds are hard preconditions: a bad block number never reaches the bus.
pub(crate) fn ensure_block_in_range(block: u8) -> Result<()> {
    if block >= BLOCK_COUNT_1K {
        return Err(Error::BlockOutOfRange { block });
    }
    Ok(())
}

// Plain writes must not touch the manufacturer block or a sector trailer;
// clobbering a trailer's access bits can brick the sector.
pub(crate) fn ensure_block_writable(block: u8) -> Result<()> {
    if block == 0 || crate::card::is_trailer(block) {
        return Err(Error::ProtectedBlock { block });
    }
    Ok(())
}
