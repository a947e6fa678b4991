// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # algowatch
//!
//! An educational TUI that animates three classroom algorithms (linear
//! search, bubble sort, binary search) over a small in-memory integer
//! array, one step at a time, with a short pause after every step.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   algo   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (steps)  │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  ┌─────────┐                                               │
//! │  │  data   │◀── random generation with clamped bounds      │
//! │  │ (array) │                                               │
//! │  └─────────┘                                               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and the run driver - serializes
//!   runs, schedules steps by their pauses, owns the status line and
//!   transcript
//! - **[`algo`]**: The step engine - the [`Algorithm`] trait plus the
//!   three runners, each a lazy sequence of (marker, pause, note)
//!   steps
//! - **[`data`]**: The array under visualization and its random
//!   generator (size 5-50, values 1-999, clamped)
//! - **[`ui`]**: Terminal rendering using ratatui - bar chart with
//!   marker-driven styling, transcript tail, theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # 20 values in 1..=99, theme from the terminal background
//! algowatch
//!
//! # A taller, denser array
//! algowatch --size 50 --max-value 999
//! ```
//!
//! ### As a library, without a terminal
//!
//! The runners are plain state machines, so the core is fully usable
//! headless:
//!
//! ```
//! use algowatch::{Algorithm, LinearSearch, Outcome, Progress};
//!
//! let mut values = vec![1, 2, 3, 4, 5];
//! let mut search = LinearSearch::new(&values, 4).unwrap();
//!
//! let outcome = loop {
//!     match search.advance(&mut values) {
//!         Progress::Step(step) => println!("{}", step.note),
//!         Progress::Done(outcome) => break outcome,
//!     }
//! };
//! assert_eq!(outcome, Outcome::Found { index: 3 });
//! ```
//!
//! ### Driving the App directly
//!
//! ```
//! use std::time::{Duration, Instant};
//! use algowatch::{App, ArrayState, Theme};
//!
//! let mut app = App::new(ArrayState::from_values(vec![3, 1, 2]), Theme::dark());
//! app.start_bubble();
//!
//! let mut now = Instant::now();
//! while app.busy() {
//!     app.tick(now);
//!     now += Duration::from_millis(100);
//! }
//! assert_eq!(app.array.values, vec![1, 2, 3]);
//! ```

pub mod algo;
pub mod app;
pub mod data;
pub mod events;
pub mod ui;

// Re-export main types for convenience
pub use algo::{
    Algorithm, BinarySearch, BubbleSort, LinearSearch, Marker, Outcome, Precondition, Progress,
    Step,
};
pub use app::{App, Prompt, PromptKind};
pub use data::{generator, ArrayState, GenSettings};
pub use ui::Theme;
