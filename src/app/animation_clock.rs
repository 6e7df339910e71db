//! Feste Tick-Rate aus variablen Frame-Zeiten.

use crate::shared::options::MAX_TICKS_PER_FRAME;

/// Akkumuliert Frame-Zeit und liefert die Anzahl fälliger Animations-Ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    interval_secs: f32,
    accumulated_secs: f32,
}

impl AnimationClock {
    /// Erstellt eine Uhr mit festem Tick-Intervall in Sekunden.
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            accumulated_secs: 0.0,
        }
    }

    pub fn interval_secs(&self) -> f32 {
        self.interval_secs
    }

    /// Addiert `dt_seconds` und gibt die Zahl der fälligen Ticks zurück.
    ///
    /// Pro Aufruf höchstens `MAX_TICKS_PER_FRAME`; überzählige Zeit wird verworfen.
    pub fn advance(&mut self, dt_seconds: f32) -> u32 {
        if !(dt_seconds.is_finite() && dt_seconds > 0.0 && self.interval_secs > 0.0) {
            return 0;
        }
        self.accumulated_secs += dt_seconds;

        let mut ticks = 0;
        while self.accumulated_secs >= self.interval_secs && ticks < MAX_TICKS_PER_FRAME {
            self.accumulated_secs -= self.interval_secs;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulated_secs = self.accumulated_secs.min(self.interval_secs);
        }
        ticks
    }
}
