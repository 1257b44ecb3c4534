//! Game rules for standard Gomoku on a 15x15 board
//!
//! - Line scanning (runs, open and blocked ends)
//! - Win conditions (five or more in a row)
//! - Game status transitions

pub mod line;
pub mod status;
pub mod win;

pub use line::{run_through, scan_runs, Direction, Run, RunEnd, WIN_LENGTH};
pub use status::{game_status, status_after_move, GameStatus};
pub use win::{check_winner, find_five_line, has_five_in_row};
