/// Countdown cooking timer
///
/// The timer itself never sleeps or spawns anything. The application feeds
/// it one `tick` per second from a recurring subscription that only exists
/// while the timer is running. Each start bumps `generation`, and ticks
/// carrying an older generation are dropped, so a cancelled countdown can
/// never fire again.

use tracing::{debug, info};

use crate::error::ValidationError;

pub const TIMES_UP: &str = "Time's up!";
pub const STOPPED: &str = "Timer Stopped";

/// What a tick or stop produced, for the notice bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct CookingTimer {
    seconds_remaining: u64,
    running: bool,
    generation: u64,
    display: String,
}

impl Default for CookingTimer {
    fn default() -> Self {
        Self {
            seconds_remaining: 0,
            running: false,
            generation: 0,
            display: format_remaining(0),
        }
    }
}

impl CookingTimer {
    #[cfg(test)]
    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Identifies the current countdown; ticks for any other value are ignored
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Label shown under the timer buttons
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Start a countdown of `input` minutes, replacing any running one.
    /// Bad input leaves the current countdown alone.
    pub fn start(&mut self, input: &str) -> Result<(), ValidationError> {
        let minutes: u64 = input
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidTimerInput)?;
        let seconds = minutes
            .checked_mul(60)
            .ok_or(ValidationError::InvalidTimerInput)?;

        if self.running {
            debug!("Cancelling countdown #{}", self.generation);
        }
        self.generation += 1;
        self.seconds_remaining = seconds;
        self.running = true;
        self.display = format_remaining(seconds);
        info!("⏱️  Timer #{} started for {} min", self.generation, minutes);
        Ok(())
    }

    /// Advance one second. Returns `Expired` on the tick that reaches zero.
    pub fn tick(&mut self, generation: u64) -> Option<TimerEvent> {
        if !self.running || generation != self.generation {
            return None;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.running = false;
            self.display = TIMES_UP.to_string();
            info!("🔔 Timer #{} finished", self.generation);
            return Some(TimerEvent::Expired);
        }

        self.display = format_remaining(self.seconds_remaining);
        None
    }

    /// Cancel the running countdown. Does nothing when idle.
    pub fn stop(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.display = STOPPED.to_string();
        info!("⏹️  Timer #{} stopped", self.generation);
        Some(TimerEvent::Stopped)
    }
}

/// "Time Left: MM:SS"
pub fn format_remaining(seconds: u64) -> String {
    format!("Time Left: {:02}:{:02}", seconds / 60, seconds % 60)
}
