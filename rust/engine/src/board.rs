use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::bean::Bean;
use crate::errors::{BeanError, BoardError};
use crate::summary::{average_index, SlotSummary};

/// Core board logic: moves a population of beans through a triangular grid
/// of pegs one row per step and collects them in slots at the bottom.
///
/// For a 4-slot board the logical coordinates are:
///
/// ```text
///                      (0, 0)
///               (0, 1)        (1, 1)
///        (0, 2)        (1, 2)        (2, 2)
///  (0, 3)       (1, 3)        (2, 3)       (3, 3)
/// [Slot0]       [Slot1]       [Slot2]      [Slot3]
/// ```
///
/// # Examples
///
/// ```
/// use beancounter_engine::bean::Bean;
/// use beancounter_engine::board::BeanCounter;
/// use beancounter_engine::rng::ScriptedRandom;
///
/// let beans = vec![
///     Bean::skill(5, Box::new(ScriptedRandom::gaussian(-1.0))),
///     Bean::skill(5, Box::new(ScriptedRandom::gaussian(2.0))),
///     Bean::skill(5, Box::new(ScriptedRandom::gaussian(2.0))),
/// ];
/// let mut board = BeanCounter::new(5);
/// board.reset(beans);
/// while board.step().unwrap() {}
///
/// assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 2]);
/// assert_eq!(board.average_slot_index(), Ok(3.0));
/// ```
#[derive(Debug)]
pub struct BeanCounter {
    slot_count: usize,
    /// Beans waiting at the top, head is admitted next
    queue: VecDeque<Bean>,
    /// Row `r` has `r + 1` pegs; a bean at `grid[r][c]` sits at `(c, r)`
    grid: Vec<Vec<Option<Bean>>>,
    slots: Vec<Vec<Bean>>,
}

impl BeanCounter {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            queue: VecDeque::new(),
            grid: empty_grid(slot_count),
            slots: empty_slots(slot_count),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Beans still waiting to enter the board.
    pub fn remaining_bean_count(&self) -> usize {
        self.queue.len()
    }

    /// Column of the in-flight bean on row `y`, or `None` if the row is empty
    /// or does not exist.
    pub fn in_flight_x(&self, y: usize) -> Option<usize> {
        self.grid.get(y)?.iter().position(Option::is_some)
    }

    /// Beans settled in slot `i`; `0` for an index past the last slot.
    pub fn slot_bean_count(&self, i: usize) -> usize {
        self.slots.get(i).map_or(0, Vec::len)
    }

    pub fn slot_counts(&self) -> Vec<usize> {
        self.slots.iter().map(Vec::len).collect()
    }

    pub fn in_flight_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn in_slots_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Queued, in-flight and settled beans together.
    pub fn total_beans(&self) -> usize {
        self.remaining_bean_count() + self.in_flight_count() + self.in_slots_count()
    }

    /// Mean slot index over the settled beans.
    pub fn average_slot_index(&self) -> Result<f64, BoardError> {
        average_index(&self.slot_counts()).ok_or(BoardError::EmptySlots)
    }

    pub fn summary(&self) -> SlotSummary {
        SlotSummary::from_counts(self.slot_counts())
    }

    /// Hard reset: every bean goes back to the top and waits in input order.
    /// The first bean is placed on the top peg straight away.
    pub fn reset(&mut self, beans: Vec<Bean>) {
        self.queue = beans
            .into_iter()
            .map(|mut b| {
                b.reset();
                b
            })
            .collect();
        self.grid = empty_grid(self.slot_count);
        self.slots = empty_slots(self.slot_count);
        self.admit_next();
        debug!(
            slot_count = self.slot_count,
            beans = self.total_beans(),
            "board reset"
        );
    }

    /// Scoops up every bean on the board and starts the experiment again with
    /// the same population.
    pub fn repeat(&mut self) {
        let mut beans = Vec::with_capacity(self.total_beans());
        for row in &mut self.grid {
            beans.extend(row.iter_mut().filter_map(Option::take));
        }
        for slot in &mut self.slots {
            beans.append(slot);
        }
        beans.extend(self.queue.drain(..));
        debug!(beans = beans.len(), "repeating experiment");
        self.reset(beans);
    }

    /// Advances every in-flight bean one row, deepest row first, then lets
    /// the next queued bean onto the top peg.
    ///
    /// Returns `false` once nothing moved, which means the board is drained.
    pub fn step(&mut self) -> Result<bool, BeanError> {
        let mut changed = false;
        let Some(last_row) = self.slot_count.checked_sub(1) else {
            return Ok(false);
        };

        for row in (0..=last_row).rev() {
            for col in 0..=row {
                let Some(mut bean) = self.grid[row][col].take() else {
                    continue;
                };
                changed = true;
                if row == last_row {
                    self.slots[bean.x()].push(bean);
                    continue;
                }
                if let Err(e) = bean.advance() {
                    self.grid[row][col] = Some(bean);
                    return Err(e);
                }
                let x = bean.x();
                self.grid[row + 1][x] = Some(bean);
            }
        }

        if self.admit_next() {
            changed = true;
        }
        trace!(
            changed,
            queued = self.queue.len(),
            in_flight = self.in_flight_count(),
            settled = self.in_slots_count(),
            "step"
        );
        Ok(changed)
    }

    /// Steps until the board is drained. Returns how many steps changed state.
    pub fn run_to_completion(&mut self) -> Result<usize, BeanError> {
        let mut steps = 0;
        while self.step()? {
            steps += 1;
        }
        Ok(steps)
    }

    /// Removes the lower half of the settled beans, lowest slots first.
    /// With an odd count `N`, `(N - 1) / 2` beans are removed.
    pub fn upper_half(&mut self) {
        let quota = self.in_slots_count() / 2;
        let removed = remove_from(self.slots.iter_mut(), quota);
        debug!(removed, "kept upper half");
    }

    /// Removes the upper half of the settled beans, highest slots first.
    /// With an odd count `N`, `(N - 1) / 2` beans are removed.
    pub fn lower_half(&mut self) {
        let quota = self.in_slots_count() / 2;
        let removed = remove_from(self.slots.iter_mut().rev(), quota);
        debug!(removed, "kept lower half");
    }

    fn admit_next(&mut self) -> bool {
        let Some(top) = self.grid.first_mut().and_then(|row| row.first_mut()) else {
            return false;
        };
        match self.queue.pop_front() {
            Some(bean) => {
                *top = Some(bean);
                true
            }
            None => false,
        }
    }
}

fn empty_grid(slot_count: usize) -> Vec<Vec<Option<Bean>>> {
    (0..slot_count)
        .map(|row| (0..=row).map(|_| None).collect())
        .collect()
}

fn empty_slots(slot_count: usize) -> Vec<Vec<Bean>> {
    (0..slot_count).map(|_| Vec::new()).collect()
}

fn remove_from<'a>(slots: impl Iterator<Item = &'a mut Vec<Bean>>, quota: usize) -> usize {
    let mut left = quota;
    for slot in slots {
        if left == 0 {
            break;
        }
        let take = left.min(slot.len());
        slot.truncate(slot.len() - take);
        left -= take;
    }
    quota - left
}
