//! Bounded generation controls (`max_length`, `num_beams`).

use crate::config::GenerationConfig;

/// Values are clamped on every change, so reading them never needs
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    max_length: u32,
    num_beams: u32,
    bounds: GenerationConfig,
}

impl GenerationParams {
    pub fn new(bounds: &GenerationConfig) -> Self {
        let mut params = Self {
            max_length: bounds.max_length,
            num_beams: bounds.num_beams,
            bounds: bounds.clone(),
        };
        params.set_max_length(bounds.max_length);
        params.set_num_beams(bounds.num_beams);
        params
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    pub fn num_beams(&self) -> u32 {
        self.num_beams
    }

    /// `"<value> tokens"`.
    pub fn max_length_label(&self) -> String {
        format!("{} tokens", self.max_length)
    }

    pub fn set_max_length(&mut self, value: u32) {
        self.max_length = value
            .max(self.bounds.max_length_min)
            .min(self.bounds.max_length_max);
    }

    pub fn set_num_beams(&mut self, value: u32) {
        self.num_beams = value.max(1).min(self.bounds.num_beams_max.max(1));
    }

    /// Step `max_length` by `direction` increments.
    pub fn step_max_length(&mut self, direction: i32) {
        let step = self.bounds.max_length_step.max(1);
        let next = if direction.is_negative() {
            self.max_length.saturating_sub(step)
        } else {
            self.max_length.saturating_add(step)
        };
        self.set_max_length(next);
    }

    pub fn step_num_beams(&mut self, direction: i32) {
        let next = if direction.is_negative() {
            self.num_beams.saturating_sub(1)
        } else {
            self.num_beams.saturating_add(1)
        };
        self.set_num_beams(next);
    }

    /// Position of `max_length` within its range, for the gauge.
    pub fn max_length_ratio(&self) -> f64 {
        let span = self.bounds.max_length_max.saturating_sub(self.bounds.max_length_min);
        if span == 0 {
            return 1.0;
        }
        f64::from(self.max_length.saturating_sub(self.bounds.max_length_min)) / f64::from(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_configured_defaults() {
        let params = GenerationParams::new(&GenerationConfig::default());
        assert_eq!(params.max_length(), 130);
        assert_eq!(params.num_beams(), 4);
        assert_eq!(params.max_length_label(), "130 tokens");
    }

    #[test]
    fn max_length_steps_and_clamps() {
        let mut params = GenerationParams::new(&GenerationConfig::default());
        params.step_max_length(1);
        assert_eq!(params.max_length(), 140);
        for _ in 0..20 {
            params.step_max_length(1);
        }
        assert_eq!(params.max_length(), 200);
        for _ in 0..40 {
            params.step_max_length(-1);
        }
        assert_eq!(params.max_length(), 20);
        assert_eq!(params.max_length_ratio(), 0.0);
    }

    #[test]
    fn num_beams_stays_within_one_and_max() {
        let mut params = GenerationParams::new(&GenerationConfig::default());
        for _ in 0..10 {
            params.step_num_beams(-1);
        }
        assert_eq!(params.num_beams(), 1);
        for _ in 0..10 {
            params.step_num_beams(1);
        }
        assert_eq!(params.num_beams(), 6);
    }
}
