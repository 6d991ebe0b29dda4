//! # beancounter-engine: Galton Board Simulation Core
//!
//! A deterministic bean counter (quincunx / Galton box) simulator. Beans fall
//! through a triangular grid of pegs one row per step, turning left or right
//! at every peg, and pile up in slots at the bottom. Outcomes are reproducible
//! given the random source handed to each bean.
//!
//! ## Core Modules
//!
//! - [`bean`] - Bean position, branch policy (luck / skill) and skill bias
//! - [`board`] - The board state machine: queue, in-flight grid, slots, trimming
//! - [`rng`] - The injected random source and its seeded / scripted implementations
//! - [`summary`] - Serializable per-slot results
//! - [`errors`] - Error types for bean movement and board statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use beancounter_engine::bean::{Bean, BeanMode};
//! use beancounter_engine::board::BeanCounter;
//! use beancounter_engine::rng::SeededRandom;
//!
//! let slot_count = 10;
//! let beans: Vec<Bean> = (0..400)
//!     .map(|i| Bean::new(slot_count, BeanMode::Luck, Box::new(SeededRandom::new_with_seed(i))))
//!     .collect();
//!
//! let mut board = BeanCounter::new(slot_count);
//! board.reset(beans);
//! board.run_to_completion().expect("beans stay on the board");
//!
//! assert_eq!(board.in_slots_count(), 400);
//! println!("{:?}", board.slot_counts());
//! ```
//!
//! ## Trimming and Repeating
//!
//! ```rust
//! use beancounter_engine::bean::Bean;
//! use beancounter_engine::board::BeanCounter;
//! use beancounter_engine::rng::ScriptedRandom;
//!
//! let beans = [-1.0, 2.0, 2.0]
//!     .iter()
//!     .map(|&g| Bean::skill(5, Box::new(ScriptedRandom::gaussian(g))))
//!     .collect();
//! let mut board = BeanCounter::new(5);
//! board.reset(beans);
//! board.run_to_completion().unwrap();
//!
//! board.lower_half();
//! assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 1]);
//!
//! board.repeat();
//! board.run_to_completion().unwrap();
//! assert_eq!(board.in_slots_count(), 2);
//! ```

pub mod bean;
pub mod board;
pub mod errors;
pub mod rng;
pub mod summary;
