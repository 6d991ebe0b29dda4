use thiserror::Error;

/// Raised by [`Bean::advance`](crate::bean::Bean::advance) when a bean leaves
/// the triangular region of the board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BeanError {
    #[error("Bean out of bounds at ({x}, {y}) on a {slot_count}-slot board")]
    OutOfBounds { x: usize, y: usize, slot_count: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("No beans in slots")]
    EmptySlots,
}
