use std::time::Duration;

/// Pause after the preflop deal.
pub const DEAL_DELAY: Duration = Duration::from_millis(1_000);
/// Pause entering and leaving showdown.
pub const SHOWDOWN_DELAY: Duration = Duration::from_millis(1_500);
/// Pause after each pot is paid.
pub const PAYOUT_DELAY: Duration = Duration::from_millis(2_000);

/// Presentation pacing hook.
///
/// Called at fixed points of the hand so a front end can animate deals and
/// chip movement. Pauses never synchronise anything inside the engine.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// Returns immediately. The default for headless play and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _duration: Duration) {}
}

/// Blocks the calling thread for each pause.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
