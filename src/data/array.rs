//! The array under visualization.

use super::generator;

/// Settings used to generate the array. Clamped on use, so any values
/// are acceptable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenSettings {
    /// Requested number of elements (effective range 5-50).
    pub size: usize,
    /// Requested upper value bound (effective range 10-999).
    pub max_value: u32,
}

impl Default for GenSettings {
    fn default() -> Self {
        Self { size: 20, max_value: 99 }
    }
}

impl GenSettings {
    /// The settings as the generator will actually apply them.
    pub fn clamped(self) -> Self {
        Self {
            size: generator::clamp_size(self.size),
            max_value: generator::clamp_max_value(self.max_value),
        }
    }
}

/// The current array plus the settings that produced it.
///
/// This is the sole mutable piece of state in the application. Its
/// length and values change only through [`ArrayState::regenerate`]
/// (full replacement) or bubble sort's in-place adjacent swaps.
#[derive(Debug, Clone)]
pub struct ArrayState {
    pub values: Vec<u32>,
    pub settings: GenSettings,
}

impl ArrayState {
    /// Generate a fresh array from the given settings.
    pub fn generate(settings: GenSettings) -> Self {
        let settings = settings.clamped();
        let values = generator::generate(settings.size, settings.max_value);
        Self { values, settings }
    }

    /// Wrap an explicit sequence of values (used by tests and library
    /// consumers that bring their own data).
    pub fn from_values(values: Vec<u32>) -> Self {
        let settings = GenSettings {
            size: values.len(),
            max_value: values.iter().copied().max().unwrap_or(GenSettings::default().max_value),
        };
        Self { values, settings }
    }

    /// Replace the array entirely with a freshly generated one.
    pub fn regenerate(&mut self, settings: GenSettings) {
        *self = Self::generate(settings);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
