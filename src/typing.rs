use std::time::Duration;

use thiserror::Error;

use crate::config::TypingConfig;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingError {
    #[error("typing animation needs at least one phrase")]
    NoPhrases,
    #[error("typing animation intervals must be non-zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    Typed,
    Paused,
    Deleted,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingEngine {
    phrases: Vec<String>,
    type_interval: Duration,
    delete_interval: Duration,
    pause: Duration,
    phrase_index: usize,
    // chars of the current phrase on screen
    shown: usize,
    is_deleting: bool,
}

impl TypingEngine {
    pub fn new(
        phrases: Vec<String>,
        type_interval: Duration,
        delete_interval: Duration,
        pause: Duration,
    ) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        if type_interval.is_zero() || delete_interval.is_zero() || pause.is_zero() {
            return Err(TypingError::ZeroInterval);
        }
        Ok(Self {
            phrases,
            type_interval,
            delete_interval,
            pause,
            phrase_index: 0,
            shown: 0,
            is_deleting: false,
        })
    }

    pub fn from_config(config: &TypingConfig) -> Result<Self, TypingError> {
        Self::new(
            config.phrases.clone(),
            config.type_interval(),
            config.delete_interval(),
            config.pause(),
        )
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    fn phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    pub fn displayed(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn next_delay(&self) -> Duration {
        if self.is_deleting {
            self.delete_interval
        } else if self.shown >= self.phrase_len() {
            self.pause
        } else {
            self.type_interval
        }
    }

    pub fn tick(&mut self) -> TypingStep {
        if !self.is_deleting {
            if self.shown < self.phrase_len() {
                self.shown += 1;
                TypingStep::Typed
            } else {
                self.is_deleting = true;
                TypingStep::Paused
            }
        } else if self.shown > 0 {
            self.shown -= 1;
            TypingStep::Deleted
        } else {
            self.is_deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            TypingStep::Advanced
        }
    }

    pub fn restart(&mut self) {
        self.phrase_index = 0;
        self.shown = 0;
        self.is_deleting = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
    interval: Duration,
}

impl CursorBlink {
    pub fn new(interval: Duration) -> Self {
        Self {
            visible: true,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn build_engine(phrases: &[&str]) -> TypingEngine {
        TypingEngine::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            MS,
            MS,
            MS,
        )
        .expect("engine should build")
    }

    // (text after the tick, step, phrase index after the tick)
    fn run(engine: &mut TypingEngine, ticks: usize) -> Vec<(String, TypingStep, usize)> {
        (0..ticks)
            .map(|_| {
                let step = engine.tick();
                (engine.displayed().to_string(), step, engine.phrase_index())
            })
            .collect()
    }

    #[test]
    fn test_hi_yo_sequence() {
        use TypingStep::*;
        let mut engine = build_engine(&["Hi", "Yo"]);
        assert_eq!(engine.displayed(), "");
        let expected = [
            ("H", Typed, 0),
            ("Hi", Typed, 0),
            ("Hi", Paused, 0),
            ("H", Deleted, 0),
            ("", Deleted, 0),
            ("", Advanced, 1),
            ("Y", Typed, 1),
            ("Yo", Typed, 1),
            ("Yo", Paused, 1),
            ("Y", Deleted, 1),
            ("", Deleted, 1),
            ("", Advanced, 0),
            ("H", Typed, 0),
        ];
        let got = run(&mut engine, expected.len());
        for (i, ((text, step, index), (want_text, want_step, want_index))) in
            got.iter().zip(expected.iter()).enumerate()
        {
            assert_eq!(text, want_text, "text at tick {i}");
            assert_eq!(step, want_step, "step at tick {i}");
            assert_eq!(index, want_index, "phrase index at tick {i}");
        }
    }

    #[test]
    fn test_delays_follow_phase() {
        let mut engine = TypingEngine::new(
            vec!["ab".to_string()],
            Duration::from_millis(100),
            Duration::from_millis(50),
            Duration::from_millis(1000),
        )
        .unwrap();
        assert_eq!(engine.next_delay(), Duration::from_millis(100));
        engine.tick();
        assert_eq!(engine.next_delay(), Duration::from_millis(100));
        engine.tick();
        // full phrase on screen: hold it
        assert_eq!(engine.next_delay(), Duration::from_millis(1000));
        assert_eq!(engine.tick(), TypingStep::Paused);
        assert!(engine.is_deleting());
        assert_eq!(engine.next_delay(), Duration::from_millis(50));
        engine.tick();
        engine.tick();
        assert_eq!(engine.displayed(), "");
        assert_eq!(engine.next_delay(), Duration::from_millis(50));
        assert_eq!(engine.tick(), TypingStep::Advanced);
        assert!(!engine.is_deleting());
        assert_eq!(engine.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_empty_phrase_is_not_stuck() {
        let mut engine = build_engine(&["", "A"]);
        assert_eq!(engine.next_delay(), MS);
        assert_eq!(engine.tick(), TypingStep::Paused);
        assert_eq!(engine.tick(), TypingStep::Advanced);
        assert_eq!(engine.phrase_index(), 1);
        assert_eq!(engine.tick(), TypingStep::Typed);
        assert_eq!(engine.displayed(), "A");

        let mut only_empty = build_engine(&[""]);
        let steps = run(&mut only_empty, 6)
            .into_iter()
            .map(|(_, step, _)| step)
            .collect::<Vec<_>>();
        assert_eq!(
            steps,
            vec![
                TypingStep::Paused,
                TypingStep::Advanced,
                TypingStep::Paused,
                TypingStep::Advanced,
                TypingStep::Paused,
                TypingStep::Advanced,
            ]
        );
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut engine = build_engine(&["héllo ✓"]);
        let texts = run(&mut engine, 7)
            .into_iter()
            .map(|(text, _, _)| text)
            .collect::<Vec<_>>();
        assert_eq!(texts[1], "hé");
        assert_eq!(texts[6], "héllo ✓");
        assert_eq!(engine.tick(), TypingStep::Paused);
        engine.tick();
        assert_eq!(engine.displayed(), "héllo ");
    }

    #[test]
    fn test_displayed_never_exceeds_phrase() {
        let phrases = ["Full Stack Developer", "", "UI/UX"];
        let mut engine = build_engine(&phrases);
        for _ in 0..500 {
            engine.tick();
            let full = phrases[engine.phrase_index()];
            assert!(full.starts_with(engine.displayed()));
            assert!(engine.displayed().len() <= full.len());
        }
    }

    #[test]
    fn test_restart() {
        let mut engine = build_engine(&["Hi", "Yo"]);
        run(&mut engine, 8);
        assert_eq!(engine.phrase_index(), 1);
        engine.restart();
        assert_eq!(engine.phrase_index(), 0);
        assert_eq!(engine.displayed(), "");
        assert!(!engine.is_deleting());
    }

    #[test]
    fn test_rejects_bad_setup() {
        assert_eq!(
            TypingEngine::new(vec![], MS, MS, MS),
            Err(TypingError::NoPhrases)
        );
        assert_eq!(
            TypingEngine::new(vec!["a".to_string()], Duration::ZERO, MS, MS),
            Err(TypingError::ZeroInterval)
        );
        assert!(TypingEngine::from_config(&TypingConfig::default()).is_ok());
    }

    #[test]
    fn test_cursor_blink() {
        let mut cursor = CursorBlink::new(Duration::from_millis(500));
        assert!(cursor.is_visible());
        assert!(!cursor.toggle());
        assert!(cursor.toggle());
        assert_eq!(cursor.interval(), Duration::from_millis(500));

        let from_config = CursorBlink::new(TypingConfig::default().cursor_blink());
        assert_eq!(from_config.interval().as_millis(), 500);
        assert!(from_config.is_visible());
    }
}
