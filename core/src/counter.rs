pub const COUNTER_SUFFIX: char = '+';

/// Parses a `data-count` value the way the page authors write it: optional
/// surrounding whitespace and sign, then decimal digits. Anything after the
/// digits is ignored, so `"150 projects"` reads as 150.
pub fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start_matches(crate::contact::is_form_space);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // Only digits remain, so the parse can fail on overflow alone.
    let value: i64 = rest[..digits_len].parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

pub fn format_count(value: i64) -> String {
    format!("{value}{COUNTER_SUFFIX}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    Finished(String),
}

impl CounterFrame {
    pub fn text(&self) -> &str {
        match self {
            CounterFrame::Running(text) | CounterFrame::Finished(text) => text,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CounterFrame::Finished(_))
    }
}

/// Counts from zero towards `target` in fixed increments, one increment per
/// animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let steps = duration_ms as f64 / frame_ms.max(1) as f64;
        let increment = if steps > 0.0 { target as f64 / steps } else { target as f64 };
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(format_count(self.target));
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(format_count(self.current.floor() as i64))
        } else {
            self.finished = true;
            CounterFrame::Finished(format_count(self.target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_reads_leading_integer() {
        assert_eq!(parse_count("150"), Some(150));
        assert_eq!(parse_count("  42px"), Some(42));
        assert_eq!(parse_count("-7"), Some(-7));
        assert_eq!(parse_count("+9"), Some(9));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-"), None);
    }

    #[test]
    fn parse_count_saturates_oversized_values() {
        assert_eq!(parse_count("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_count("-99999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn increment_targets_sixty_steps_per_second() {
        let animation = CounterAnimation::new(125, 2000, 16);
        assert!((animation.increment() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_target_finishes_on_first_step() {
        let mut animation = CounterAnimation::new(0, 2000, 16);
        assert_eq!(animation.step(), CounterFrame::Finished("0+".to_string()));
    }

    #[test]
    fn negative_target_finishes_on_first_step() {
        let mut animation = CounterAnimation::new(-5, 2000, 16);
        assert_eq!(animation.step().text(), "-5+");
    }
}
