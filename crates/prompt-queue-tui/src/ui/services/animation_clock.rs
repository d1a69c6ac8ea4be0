/// Frame counter driving the pulsing countdown label.
/// Advanced once per UI tick (~50ms).
pub struct AnimationClock {
    frame_counter: u64,
}

/// Frames per half pulse: 10 frames at 50ms = 500ms on, 500ms off
const PULSE_HALF_PERIOD: u64 = 10;

impl AnimationClock {
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// True for the bright phase of the pulse
    pub fn pulse_on(&self) -> bool {
        (self.frame_counter / PULSE_HALF_PERIOD) % 2 == 0
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_phases() {
        let mut clock = AnimationClock::new();
        assert!(clock.pulse_on());

        for _ in 0..PULSE_HALF_PERIOD {
            clock.tick();
        }
        assert!(!clock.pulse_on());

        for _ in 0..PULSE_HALF_PERIOD {
            clock.tick();
        }
        assert!(clock.pulse_on());
    }
}
