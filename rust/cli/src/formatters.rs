//! Text rendering of the board for terminal display.
//!
//! Pure functions over the engine's read accessors. Every peg is printed as
//! `1` when a bean sits on it and `0` otherwise, indented into a triangle,
//! with the slot counts on the last line.
//!
//! ## Example
//!
//! ```rust
//! use beancounter_engine::board::BeanCounter;
//! use beancounter_cli::formatters::{format_board, format_slots};
//!
//! let board = BeanCounter::new(3);
//! assert_eq!(format_slots(&board), "   0   0   0");
//! assert!(format_board(&board).ends_with("   0   0   0"));
//! ```

use beancounter_engine::board::BeanCounter;

/// Blank columns between two pegs. Odd values keep rows centred.
const X_SPACING: usize = 3;

const FIELD_WIDTH: usize = X_SPACING + 1;

/// Width of the first field of peg row `y`, which carries the indentation.
fn indent(slot_count: usize, y: usize) -> usize {
    let root = (slot_count - 1) * FIELD_WIDTH / 2 + FIELD_WIDTH;
    root - FIELD_WIDTH / 2 * y
}

/// Slot bean counts, each right-aligned in a fixed-width field.
pub fn format_slots(board: &BeanCounter) -> String {
    (0..board.slot_count())
        .map(|i| format!("{:>w$}", board.slot_bean_count(i), w = FIELD_WIDTH))
        .collect()
}

/// Peg rows followed by the slot counts.
pub fn format_board(board: &BeanCounter) -> String {
    let slot_count = board.slot_count();
    let mut s = String::new();
    for y in 0..slot_count {
        let occupied = board.in_flight_x(y);
        for x in 0..=y {
            let width = if x == 0 { indent(slot_count, y) } else { FIELD_WIDTH };
            let peg = u8::from(occupied == Some(x));
            s.push_str(&format!("{:>w$}", peg, w = width));
        }
        s.push('\n');
    }
    s.push_str(&format_slots(board));
    s
}
