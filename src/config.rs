use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_ms: u64,
    pub cursor_blink_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: crate::content::HERO_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 1000,
            cursor_blink_ms: 500,
        }
    }
}

impl TypingConfig {
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub delay_ms: u64,
    /// Probability in `[0, 1]` that the simulated send succeeds.
    pub success_rate: f64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            success_rate: 0.8,
        }
    }
}

impl SubmissionConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub activation_offset: f64,
    pub nav_offset: f64,
    pub scroll_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            activation_offset: 100.0,
            nav_offset: 80.0,
            scroll_top_threshold: 300.0,
        }
    }
}

pub const LOADING_SCREEN_MS: u64 = 2000;
