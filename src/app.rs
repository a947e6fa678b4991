//! Application state and the run driver.

use std::time::{Duration, Instant};

use crate::algo::{Algorithm, BinarySearch, BubbleSort, LinearSearch, Marker, Progress};
use crate::data::{ArrayState, GenSettings};
use crate::ui::Theme;

/// Poll interval when no run is animating.
pub const IDLE_POLL: Duration = Duration::from_millis(100);

/// Which value a prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `size [max-value]` for regeneration.
    Generate,
    /// Target value for linear search.
    LinearTarget,
    /// Target value for binary search.
    BinaryTarget,
}

impl PromptKind {
    /// Label shown in front of the input field.
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Generate => "size [max-value]",
            PromptKind::LinearTarget => "linear search target",
            PromptKind::BinaryTarget => "binary search target",
        }
    }
}

/// One-line text prompt state.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

/// An algorithm run in flight.
struct RunState {
    algorithm: Box<dyn Algorithm>,
    next_step_at: Instant,
    steps_taken: usize,
}

/// Main application state: the array, the current highlight marker,
/// the status line and transcript, and the in-flight run if any.
///
/// Exactly one run may be in flight; starting another while one is
/// animating is refused with a status message.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub array: ArrayState,
    pub marker: Marker,
    pub status: String,
    pub transcript: Vec<String>,
    pub prompt: Option<Prompt>,
    pub theme: Theme,
    run: Option<RunState>,
}

impl App {
    /// Create a new App around an already-generated array.
    pub fn new(array: ArrayState, theme: Theme) -> Self {
        let status = generated_status(&array);
        Self {
            running: true,
            show_help: false,
            array,
            marker: Marker::default(),
            status,
            transcript: Vec::new(),
            prompt: None,
            theme,
            run: None,
        }
    }

    /// True while an algorithm run is animating.
    pub fn busy(&self) -> bool {
        self.run.is_some()
    }

    /// Name of the in-flight algorithm, if any.
    pub fn run_label(&self) -> Option<&'static str> {
        self.run.as_ref().map(|run| run.algorithm.name())
    }

    /// Replace the array entirely and reset the display.
    pub fn regenerate(&mut self, settings: GenSettings) {
        if self.refuse_if_busy() {
            return;
        }
        self.array.regenerate(settings);
        self.marker = Marker::default();
        self.transcript.clear();
        self.status = generated_status(&self.array);
    }

    /// Start a linear search for `target`.
    pub fn start_linear(&mut self, target: u32) {
        if self.refuse_if_busy() {
            return;
        }
        match LinearSearch::new(&self.array.values, target) {
            Ok(search) => self.begin(Box::new(search), format!("Linear search for {}", target)),
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Start an in-place bubble sort.
    pub fn start_bubble(&mut self) {
        if self.refuse_if_busy() {
            return;
        }
        match BubbleSort::new(&self.array.values) {
            Ok(sort) => self.begin(Box::new(sort), "Bubble sort".to_string()),
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Start a binary search for `target`. Refused unless the array is
    /// ascending-sorted.
    pub fn start_binary(&mut self, target: u32) {
        if self.refuse_if_busy() {
            return;
        }
        match BinarySearch::new(&self.array.values, target) {
            Ok(search) => self.begin(Box::new(search), format!("Binary search for {}", target)),
            Err(err) => self.status = err.to_string(),
        }
    }

    fn begin(&mut self, algorithm: Box<dyn Algorithm>, headline: String) {
        self.marker = Marker::default();
        self.transcript.clear();
        self.transcript.push(headline.clone());
        self.status = headline;
        self.run = Some(RunState { algorithm, next_step_at: Instant::now(), steps_taken: 0 });
    }

    fn refuse_if_busy(&mut self) -> bool {
        if let Some(run) = &self.run {
            let msg = format!("Wait for {} to finish", run.algorithm.name());
            self.status = msg;
            true
        } else {
            false
        }
    }

    /// Advance the in-flight run by one step if its pause has elapsed.
    ///
    /// Applies the step's marker, appends its transcript line, and on
    /// completion replaces the status with the outcome summary. The
    /// final marker stays on screen until the next action.
    pub fn tick(&mut self, now: Instant) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if now < run.next_step_at {
            return;
        }
        match run.algorithm.advance(&mut self.array.values) {
            Progress::Step(step) => {
                run.steps_taken += 1;
                run.next_step_at = now + step.pause;
                self.status = format!("Running {}: step {}", run.algorithm.name(), run.steps_taken);
                self.marker = step.marker;
                self.transcript.push(step.note);
            }
            Progress::Done(outcome) => {
                let steps = run.steps_taken;
                let summary = outcome.summary();
                self.transcript.push(summary.clone());
                self.status = format!("{} ({} steps)", summary, steps);
                self.run = None;
            }
        }
    }

    /// Time until the next step is due, or None when idle.
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.run.as_ref().map(|run| run.next_step_at.saturating_duration_since(now))
    }

    /// Open a one-line prompt for the given input.
    pub fn open_prompt(&mut self, kind: PromptKind) {
        if self.refuse_if_busy() {
            return;
        }
        self.prompt = Some(Prompt { kind, buffer: String::new() });
        self.status = match kind {
            PromptKind::Generate => {
                let settings = self.array.settings;
                format!(
                    "Enter size and optional max value (Enter keeps {} and {})",
                    settings.size, settings.max_value
                )
            }
            PromptKind::LinearTarget | PromptKind::BinaryTarget => {
                "Enter the target value, then press Enter".to_string()
            }
        };
    }

    /// Close the prompt without acting on it.
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.status = "Cancelled".to_string();
    }

    /// Append a character to the prompt buffer.
    pub fn prompt_push(&mut self, c: char) {
        if let Some(prompt) = &mut self.prompt {
            prompt.buffer.push(c);
        }
    }

    /// Remove the last character from the prompt buffer.
    pub fn prompt_pop(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            prompt.buffer.pop();
        }
    }

    /// Parse the prompt buffer and dispatch the requested action.
    ///
    /// Unparseable input is reported via the status line; nothing runs
    /// and the array is untouched.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        match prompt.kind {
            PromptKind::Generate => match parse_generate(&prompt.buffer, self.array.settings) {
                Ok(settings) => self.regenerate(settings),
                Err(msg) => self.status = msg,
            },
            PromptKind::LinearTarget => match parse_target(&prompt.buffer) {
                Ok(target) => self.start_linear(target),
                Err(msg) => self.status = msg,
            },
            PromptKind::BinaryTarget => match parse_target(&prompt.buffer) {
                Ok(target) => self.start_binary(target),
                Err(msg) => self.status = msg,
            },
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

fn generated_status(array: &ArrayState) -> String {
    format!("Generated {} values in 1..={}", array.len(), array.settings.max_value)
}

/// Parse a search target. Empty or non-numeric input yields a guidance
/// message, not an error.
fn parse_target(input: &str) -> Result<u32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Enter a target value first".to_string());
    }
    input.parse::<u32>().map_err(|_| "The target must be a whole number".to_string())
}

/// Parse `size [max-value]` for regeneration. Empty input reuses the
/// current settings.
fn parse_generate(input: &str, current: GenSettings) -> Result<GenSettings, String> {
    let mut parts = input.split_whitespace();
    let Some(size_str) = parts.next() else {
        return Ok(current);
    };
    let size = size_str
        .parse::<usize>()
        .map_err(|_| "Size and max value must be whole numbers".to_string())?;
    let max_value = match parts.next() {
        Some(max_str) => max_str
            .parse::<u32>()
            .map_err(|_| "Size and max value must be whole numbers".to_string())?,
        None => current.max_value,
    };
    if parts.next().is_some() {
        return Err("Enter at most two numbers: size and max value".to_string());
    }
    Ok(GenSettings { size, max_value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(values: Vec<u32>) -> App {
        App::new(ArrayState::from_values(values), Theme::dark())
    }

    /// Tick with simulated time until the run completes.
    fn drain(app: &mut App) {
        let mut now = Instant::now();
        for _ in 0..100_000 {
            if !app.busy() {
                return;
            }
            app.tick(now);
            now += Duration::from_millis(200);
        }
        panic!("run did not complete");
    }

    #[test]
    fn test_linear_run_to_completion() {
        let mut app = app_with(vec![1, 2, 3, 4, 5]);
        app.start_linear(4);
        assert!(app.busy());
        drain(&mut app);

        assert!(app.status.contains("index 3"));
        assert!(app.status.contains("4 steps"));
        // Headline + four step notes + outcome summary.
        assert_eq!(app.transcript.len(), 6);
        assert_eq!(app.marker.found, Some(3));
    }

    #[test]
    fn test_second_run_is_refused_while_busy() {
        let mut app = app_with(vec![1, 2, 3, 4, 5]);
        app.start_linear(4);
        app.start_bubble();

        assert_eq!(app.run_label(), Some("linear search"));
        assert!(app.status.contains("Wait for linear search"));
    }

    #[test]
    fn test_binary_refusal_leaves_state_untouched() {
        let mut app = app_with(vec![4, 1, 3]);
        app.start_binary(2);

        assert!(!app.busy());
        assert!(app.status.contains("bubble sort"));
        assert_eq!(app.array.values, vec![4, 1, 3]);
        assert!(app.transcript.is_empty());
        assert_eq!(app.marker, Marker::default());
    }

    #[test]
    fn test_binary_runs_after_sorting() {
        let mut app = app_with(vec![4, 1, 3]);
        app.start_bubble();
        drain(&mut app);
        assert_eq!(app.array.values, vec![1, 3, 4]);

        app.start_binary(3);
        drain(&mut app);
        assert!(app.status.contains("index 1"));
    }

    #[test]
    fn test_regenerate_resets_display() {
        let mut app = app_with(vec![1, 2, 3, 4, 5]);
        app.start_linear(4);
        drain(&mut app);
        assert!(app.marker.found.is_some());

        app.regenerate(GenSettings { size: 10, max_value: 50 });
        assert_eq!(app.marker, Marker::default());
        assert!(app.transcript.is_empty());
        assert_eq!(app.array.len(), 10);
        assert!(app.status.starts_with("Generated 10 values"));
    }

    #[test]
    fn test_regenerate_refused_while_busy() {
        let mut app = app_with(vec![1, 2, 3, 4, 5]);
        app.start_bubble();
        let before = app.array.values.clone();
        app.regenerate(GenSettings::default());

        assert_eq!(app.array.values, before);
        assert!(app.busy());
    }

    #[test]
    fn test_prompt_submits_target() {
        let mut app = app_with(vec![1, 2, 3]);
        app.open_prompt(PromptKind::LinearTarget);
        app.prompt_push('2');
        app.submit_prompt();

        assert!(app.busy());
        assert_eq!(app.run_label(), Some("linear search"));
    }

    #[test]
    fn test_prompt_rejects_garbage_target() {
        let mut app = app_with(vec![1, 2, 3]);
        app.open_prompt(PromptKind::BinaryTarget);
        for c in "12 34".chars() {
            app.prompt_push(c);
        }
        app.submit_prompt();

        assert!(!app.busy());
        assert!(app.status.contains("whole number"));
    }

    #[test]
    fn test_empty_target_is_guidance_not_run() {
        let mut app = app_with(vec![1, 2, 3]);
        app.open_prompt(PromptKind::LinearTarget);
        app.submit_prompt();

        assert!(!app.busy());
        assert_eq!(app.status, "Enter a target value first");
    }

    #[test]
    fn test_parse_generate_variants() {
        let current = GenSettings { size: 20, max_value: 99 };
        assert_eq!(parse_generate("", current), Ok(current));
        assert_eq!(parse_generate("30", current), Ok(GenSettings { size: 30, max_value: 99 }));
        assert_eq!(
            parse_generate(" 30 500 ", current),
            Ok(GenSettings { size: 30, max_value: 500 })
        );
        assert!(parse_generate("a", current).is_err());
        assert!(parse_generate("30 b", current).is_err());
        assert!(parse_generate("1 2 3", current).is_err());
    }

    #[test]
    fn test_time_until_next_step() {
        let mut app = app_with(vec![1, 2, 3]);
        assert!(app.time_until_next_step(Instant::now()).is_none());

        app.start_linear(2);
        let now = Instant::now();
        app.tick(now);
        let until = app.time_until_next_step(now).unwrap();
        assert!(until <= Duration::from_millis(120));
    }
}
