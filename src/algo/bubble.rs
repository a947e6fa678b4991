//! Bubble sort: adjacent compare-and-swap passes with early exit.

use super::{Algorithm, Marker, Outcome, Precondition, Progress, Step, BUBBLE_PAUSE};

/// Where the runner is within the compare/swap cycle for the current
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Emit the compare step for index `i`.
    Compare,
    /// Swap if the pair is out of order and emit the post-swap step,
    /// otherwise move straight on to the next compare.
    Resolve,
}

/// In-place ascending bubble sort.
///
/// Each pass bubbles the largest remaining element into its final
/// position, so the scan shortens by one per pass. A full pass without
/// swaps ends the run early. Only strictly greater pairs swap, which
/// keeps equal elements in their original relative order.
#[derive(Debug)]
pub struct BubbleSort {
    pass: usize,
    i: usize,
    phase: Phase,
    swapped_this_pass: bool,
    swaps: usize,
    finished: Option<Outcome>,
}

impl BubbleSort {
    pub fn new(values: &[u32]) -> Result<Self, Precondition> {
        if values.is_empty() {
            return Err(Precondition::EmptyArray);
        }
        Ok(Self {
            pass: 0,
            i: 0,
            phase: Phase::Compare,
            swapped_this_pass: false,
            swaps: 0,
            finished: None,
        })
    }

    fn finish(&mut self, passes: usize) -> Progress {
        let outcome = Outcome::Sorted { passes, swaps: self.swaps };
        self.finished = Some(outcome.clone());
        Progress::Done(outcome)
    }
}

impl Algorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn advance(&mut self, values: &mut [u32]) -> Progress {
        if let Some(outcome) = &self.finished {
            return Progress::Done(outcome.clone());
        }
        let n = values.len();
        if n < 2 {
            return self.finish(0);
        }

        loop {
            match self.phase {
                Phase::Compare => {
                    if self.i >= n - 1 - self.pass {
                        // Pass complete; the last `pass + 1` elements
                        // are in final position.
                        let completed = self.pass + 1;
                        if !self.swapped_this_pass || completed >= n - 1 {
                            return self.finish(completed);
                        }
                        self.pass = completed;
                        self.i = 0;
                        self.swapped_this_pass = false;
                        continue;
                    }
                    let i = self.i;
                    self.phase = Phase::Resolve;
                    return Progress::Step(Step {
                        marker: Marker::active(i),
                        pause: BUBBLE_PAUSE,
                        note: format!(
                            "compare a[{}] = {} with a[{}] = {}",
                            i,
                            values[i],
                            i + 1,
                            values[i + 1]
                        ),
                    });
                }
                Phase::Resolve => {
                    let i = self.i;
                    self.i += 1;
                    self.phase = Phase::Compare;
                    if values[i] > values[i + 1] {
                        values.swap(i, i + 1);
                        self.swapped_this_pass = true;
                        self.swaps += 1;
                        return Progress::Step(Step {
                            marker: Marker::active(i + 1),
                            pause: BUBBLE_PAUSE,
                            note: format!(
                                "swap: a[{}] = {} and a[{}] = {}",
                                i,
                                values[i],
                                i + 1,
                                values[i + 1]
                            ),
                        });
                    }
                    // In order: no step for this pair.
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::drive;
    use crate::data::generator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sorts_into_ascending_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut values = generator::generate_with(&mut rng, 25, 200);
        let mut expected = values.clone();
        expected.sort();

        let mut sort = BubbleSort::new(&values).unwrap();
        drive(&mut sort, &mut values);

        assert_eq!(values, expected);
    }

    #[test]
    fn test_worst_case_scenario_needs_all_passes() {
        let mut values = vec![5, 3, 1, 4, 2];
        let mut sort = BubbleSort::new(&values).unwrap();
        let (steps, outcome) = drive(&mut sort, &mut values);

        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(outcome, Outcome::Sorted { passes: 4, swaps: 7 });
        // 4 + 3 + 2 + 1 compares plus 7 post-swap steps.
        assert_eq!(steps.len(), 17);
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let mut values = vec![1, 2, 3, 4, 5];
        let mut sort = BubbleSort::new(&values).unwrap();
        let (steps, outcome) = drive(&mut sort, &mut values);

        assert_eq!(outcome, Outcome::Sorted { passes: 1, swaps: 0 });
        // One compare per adjacent pair, no swap steps.
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_equal_elements_are_not_swapped() {
        let mut values = vec![3, 3];
        let mut sort = BubbleSort::new(&values).unwrap();
        let (steps, outcome) = drive(&mut sort, &mut values);

        assert_eq!(values, vec![3, 3]);
        assert_eq!(outcome, Outcome::Sorted { passes: 1, swaps: 0 });
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_single_element_is_already_sorted() {
        let mut values = vec![9];
        let mut sort = BubbleSort::new(&values).unwrap();
        let (steps, outcome) = drive(&mut sort, &mut values);

        assert_eq!(outcome, Outcome::Sorted { passes: 0, swaps: 0 });
        assert!(steps.is_empty());
    }

    #[test]
    fn test_empty_array_is_refused() {
        assert_eq!(BubbleSort::new(&[]).unwrap_err(), Precondition::EmptyArray);
    }

    #[test]
    fn test_post_swap_step_highlights_moved_element() {
        let mut values = vec![2, 1];
        let mut sort = BubbleSort::new(&values).unwrap();
        let (steps, _) = drive(&mut sort, &mut values);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].marker.active, Some(0));
        assert_eq!(steps[1].marker.active, Some(1));
        assert_eq!(values, vec![1, 2]);
    }
}
