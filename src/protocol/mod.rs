//! Line protocol handling.
//!
//! One command per process: `identify` or `move`. A `move` request carries
//! the game's move index, the board size and the board itself as `:`
//! separated tile codes.

pub mod codec;
pub mod parser;
pub mod request;

pub use codec::{decode_board, encode_board};
pub use parser::{parse_command, Command};
pub use request::{read_move_request, MoveRequest, ProtocolError};
