use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BeanError;
use crate::rng::RandomSource;

/// How a bean picks a branch at each peg.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeanMode {
    /// Unbiased coin flip at every peg
    Luck,
    /// Goes right until its bias is used up, then left
    Skill,
}

impl BeanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeanMode::Luck => "luck",
            BeanMode::Skill => "skill",
        }
    }
}

impl fmt::Display for BeanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "luck" => Ok(BeanMode::Luck),
            "skill" => Ok(BeanMode::Skill),
            other => Err(format!(
                "Unrecognized mode '{}': expected 'luck' or 'skill'",
                other
            )),
        }
    }
}

/// Skill level for a board with `slot_count` slots, from one Gaussian sample.
///
/// `round(sample * sqrt(slot_count / 4) + (slot_count - 1) / 2)`, clamped to
/// `[0, slot_count - 1]`.
pub fn skill_bias(slot_count: usize, sample: f64) -> usize {
    let mean = (slot_count as f64 - 1.0) * 0.5;
    let stdev = (slot_count as f64 * 0.25).sqrt();
    let raw = (sample * stdev + mean).round() as i64;
    let max = slot_count as i64 - 1;
    raw.min(max).max(0) as usize
}

/// A single bean falling through the board.
///
/// Positions use the board's logical coordinates: `y` is the peg row and `x`
/// the number of right turns taken so far, so `x <= y` while in flight.
///
/// # Examples
///
/// ```
/// use beancounter_engine::bean::Bean;
/// use beancounter_engine::rng::ScriptedRandom;
///
/// // A Gaussian sample of 2.0 on a 5-slot board gives bias 4: always right.
/// let mut bean = Bean::skill(5, Box::new(ScriptedRandom::gaussian(2.0)));
/// assert_eq!(bean.bias(), Some(4));
/// for _ in 0..4 {
///     bean.advance().unwrap();
/// }
/// assert_eq!((bean.x(), bean.y()), (4, 4));
/// ```
#[derive(Debug)]
pub struct Bean {
    x: usize,
    y: usize,
    slot_count: usize,
    mode: BeanMode,
    /// Fixed at construction; only meaningful in skill mode
    bias: usize,
    rng: Box<dyn RandomSource>,
}

impl Bean {
    pub fn new(slot_count: usize, mode: BeanMode, mut rng: Box<dyn RandomSource>) -> Self {
        let bias = match mode {
            BeanMode::Skill => skill_bias(slot_count, rng.next_gaussian()),
            BeanMode::Luck => 0,
        };
        Self {
            x: 0,
            y: 0,
            slot_count,
            mode,
            bias,
            rng,
        }
    }

    pub fn luck(slot_count: usize, rng: Box<dyn RandomSource>) -> Self {
        Self::new(slot_count, BeanMode::Luck, rng)
    }

    pub fn skill(slot_count: usize, rng: Box<dyn RandomSource>) -> Self {
        Self::new(slot_count, BeanMode::Skill, rng)
    }

    pub fn x(&self) -> usize {
        self.x
    }
    pub fn y(&self) -> usize {
        self.y
    }
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }
    pub fn mode(&self) -> BeanMode {
        self.mode
    }

    /// Skill level, or `None` for a luck-mode bean.
    pub fn bias(&self) -> Option<usize> {
        match self.mode {
            BeanMode::Skill => Some(self.bias),
            BeanMode::Luck => None,
        }
    }

    /// Back to the top of the board. The bias is kept.
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Falls one row, turning right or left according to the bean's mode.
    ///
    /// The move is applied before the bounds check, so a failing bean keeps
    /// its out-of-range position.
    pub fn advance(&mut self) -> Result<(), BeanError> {
        self.y += 1;
        let right = match self.mode {
            BeanMode::Luck => self.rng.next_binary() == 1,
            BeanMode::Skill => self.x < self.bias,
        };
        if right {
            self.x += 1;
        }

        if self.x >= self.slot_count || self.y >= self.slot_count || self.x > self.y {
            return Err(BeanError::OutOfBounds {
                x: self.x,
                y: self.y,
                slot_count: self.slot_count,
            });
        }
        Ok(())
    }
}
