/// Decides, from a stream of monotonically increasing timestamps, when enough
/// time has passed to run a game step. Callers may poll far more often than
/// the tick interval; intervals are measured from the last timestamp that was
/// answered with `true`, not from every call.
pub struct Ticker {
    interval_ms: u64,
    last_step_ms: Option<u64>,
}

impl Ticker {
    pub fn new(interval_ms: u64) -> Self {
        Ticker { interval_ms, last_step_ms: None }
    }

    pub fn should_step(&mut self, now_ms: u64) -> bool {
        match self.last_step_ms {
            // First call only records the baseline
            None => {
                self.last_step_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms.saturating_sub(last) >= self.interval_ms => {
                self.last_step_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_records_the_baseline() {
        let mut ticker = Ticker::new(300);
        assert!(!ticker.should_step(1000));
        assert!(!ticker.should_step(1299));
        assert!(ticker.should_step(1300));
    }

    #[test]
    fn sub_interval_calls_are_suppressed() {
        let mut ticker = Ticker::new(300);
        ticker.should_step(0);

        assert!(!ticker.should_step(100));
        assert!(!ticker.should_step(200));
        assert!(!ticker.should_step(299));
        assert!(ticker.should_step(300));
    }

    #[test]
    fn interval_is_measured_from_the_last_applied_step() {
        let mut ticker = Ticker::new(300);
        ticker.should_step(0);

        // Polling every 100ms, like a display-refresh callback
        let steps: Vec<u64> = (1..=12)
            .map(|i| i * 100)
            .filter(|&t| ticker.should_step(t))
            .collect();

        assert_eq!(steps, vec![300, 600, 900, 1200]);
    }

    #[test]
    fn late_callbacks_step_once_and_rebase() {
        let mut ticker = Ticker::new(300);
        ticker.should_step(0);

        // A long stall produces a single step, not a burst
        assert!(ticker.should_step(1000));
        assert!(!ticker.should_step(1100));
        assert!(ticker.should_step(1300));
    }
}
