//! Linear search: scan left to right until the target matches.

use super::{Algorithm, Marker, Outcome, Precondition, Progress, Step, LINEAR_PAUSE};

/// Scans indices in order, one step per index. The matching step also
/// carries the found marker, so a hit at index `i` emits `i + 1` steps;
/// a miss emits one step per element.
#[derive(Debug)]
pub struct LinearSearch {
    target: u32,
    next: usize,
    finished: Option<Outcome>,
}

impl LinearSearch {
    pub fn new(values: &[u32], target: u32) -> Result<Self, Precondition> {
        if values.is_empty() {
            return Err(Precondition::EmptyArray);
        }
        Ok(Self { target, next: 0, finished: None })
    }
}

impl Algorithm for LinearSearch {
    fn name(&self) -> &'static str {
        "linear search"
    }

    fn advance(&mut self, values: &mut [u32]) -> Progress {
        if let Some(outcome) = &self.finished {
            return Progress::Done(outcome.clone());
        }
        if self.next >= values.len() {
            self.finished = Some(Outcome::NotFound);
            return Progress::Done(Outcome::NotFound);
        }

        let i = self.next;
        self.next += 1;
        let value = values[i];
        if value == self.target {
            self.finished = Some(Outcome::Found { index: i });
            Progress::Step(Step {
                marker: Marker { active: Some(i), found: Some(i), ..Marker::default() },
                pause: LINEAR_PAUSE,
                note: format!("a[{}] = {} matches the target", i, value),
            })
        } else {
            Progress::Step(Step {
                marker: Marker::active(i),
                pause: LINEAR_PAUSE,
                note: format!("a[{}] = {}, not {}", i, value, self.target),
            })
        }
    }
}
