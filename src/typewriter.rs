#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterState {
    NotStarted,
    Running,
    Finished,
}

/// Reveals `source` one character per tick. Never loops, never erases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    source: String,
    // in chars, not bytes
    revealed: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let total = source.chars().count();
        Self {
            source,
            revealed: 0,
            total,
        }
    }

    /// Start over from empty on `source`, dropping all progress.
    pub fn restart(&mut self, source: impl Into<String>) {
        *self = Self::new(source);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Advance by one character. Returns `false` once there is nothing left.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn displayed(&self) -> &str {
        match self.source.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.source[..end],
            None => &self.source,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn state(&self) -> TypewriterState {
        if self.is_finished() {
            TypewriterState::Finished
        } else if self.revealed == 0 {
            TypewriterState::NotStarted
        } else {
            TypewriterState::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick_then_stops() {
        let mut tw = Typewriter::new("abc");
        let mut seen = vec![tw.displayed().to_string()];
        while tw.tick() {
            seen.push(tw.displayed().to_string());
        }
        assert_eq!(seen, ["", "a", "ab", "abc"]);

        // further ticks are no-ops
        for _ in 0..5 {
            assert!(!tw.tick());
        }
        assert_eq!(tw.displayed(), "abc");
        assert_eq!(tw.state(), TypewriterState::Finished);
    }

    #[test]
    fn test_states() {
        let mut tw = Typewriter::new("ab");
        assert_eq!(tw.state(), TypewriterState::NotStarted);
        tw.tick();
        assert_eq!(tw.state(), TypewriterState::Running);
        tw.tick();
        assert_eq!(tw.state(), TypewriterState::Finished);
    }

    #[test]
    fn test_multibyte_chars_are_not_split() {
        let mut tw = Typewriter::new("Été & ❤");
        tw.tick();
        assert_eq!(tw.displayed(), "É");
        tw.tick();
        assert_eq!(tw.displayed(), "Ét");
        while tw.tick() {}
        assert_eq!(tw.displayed(), "Été & ❤");
    }

    #[test]
    fn test_empty_source_is_finished_from_the_start() {
        let mut tw = Typewriter::new("");
        assert_eq!(tw.displayed(), "");
        assert!(tw.is_finished());
        assert!(!tw.tick());
    }

    #[test]
    fn test_restart_mid_run_begins_from_empty() {
        let mut tw = Typewriter::new("hello");
        tw.tick();
        tw.tick();
        assert_eq!(tw.displayed(), "he");

        tw.restart("Été");
        assert_eq!(tw.source(), "Été");
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.state(), TypewriterState::NotStarted);
        assert_eq!(tw, Typewriter::new("Été"));

        // the old length doesn't carry over
        let mut ticks = 0;
        while tw.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(tw.displayed(), "Été");
    }

    #[test]
    fn test_restart_after_finish_with_same_source() {
        let mut tw = Typewriter::new("ab");
        while tw.tick() {}
        assert!(tw.is_finished());

        tw.restart("ab");
        assert_eq!(tw.displayed(), "");
        assert!(tw.tick());
        assert_eq!(tw.displayed(), "a");
    }
}
