#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut reveal = RevealOnce::new();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_revealed());
        assert!(reveal.observe(true));
        assert!(reveal.is_revealed());
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = RevealOnce::new();
        let mut b = RevealOnce::new();
        assert!(a.observe(true));
        assert!(!b.is_revealed());
        assert!(b.observe(true));
    }
}
