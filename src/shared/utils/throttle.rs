use chrono::{DateTime, Duration, Utc};

/// Leading-edge throttle: the first call passes, later calls inside the
/// window are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle {
    window: Duration,
    last_fired: Option<DateTime<Utc>>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Returns `true` and records the call when outside the window
    pub fn try_fire(&mut self, now: DateTime<Utc>) -> bool {
        match self.last_fired {
            Some(last) if now - last < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_calls_inside_window() {
        let start = Utc::now();
        let mut throttle = Throttle::new(Duration::seconds(10));

        assert!(throttle.try_fire(start));
        assert!(!throttle.try_fire(start + Duration::seconds(3)));
        assert!(!throttle.try_fire(start + Duration::milliseconds(9_999)));
        assert!(throttle.try_fire(start + Duration::seconds(10)));
    }
}
