//! The steep countdown.
//!
//! A pure one-second state machine (`Countdown`) plus the render loop that
//! drives it. The loop redraws the progress bar in place once per second
//! and exits when the countdown reaches `Done`; the final render shows
//! 100%. Ordering is strictly sequential, there is no background worker.

use std::time::Duration;

use crate::ui;

const TICK: Duration = Duration::from_secs(1);

// -----------------------------------------------------------------------------
// State machine
// -----------------------------------------------------------------------------

/// Countdown phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Done,
}

/// One-second countdown over a fixed total. Pure state, no wall clock.
#[derive(Debug, Clone)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.remaining.is_zero() {
            Phase::Done
        } else {
            Phase::Running
        }
    }

    /// Advance one second. Remaining never goes below zero.
    pub fn tick(&mut self) -> Phase {
        self.remaining = self.remaining.saturating_sub(TICK);
        self.phase()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn elapsed(&self) -> Duration {
        self.total - self.remaining
    }

    /// Percent of the total that has elapsed: 0 at the start, 100 at `Done`.
    pub fn percent_elapsed(&self) -> u64 {
        if self.total.is_zero() {
            return 100;
        }
        self.elapsed().as_secs() * 100 / self.total.as_secs()
    }
}

// -----------------------------------------------------------------------------
// Render loop
// -----------------------------------------------------------------------------

/// Run the countdown to completion, redrawing the bar once per second.
///
/// A countdown of T seconds renders T+1 times and ticks T times.
pub async fn steep(total: Duration) {
    let bar = ui::create_steep_bar(total);
    let mut countdown = Countdown::new(total);

    loop {
        bar.set_position(countdown.elapsed().as_secs());
        bar.set_message(format!(
            "({:>3}%) | {:>3}/{:>3} seconds remaining",
            countdown.percent_elapsed(),
            countdown.remaining().as_secs(),
            total.as_secs()
        ));

        if countdown.phase() == Phase::Done {
            break;
        }
        tokio::time::sleep(TICK).await;
        countdown.tick();
    }

    bar.finish();
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
