//! Focus session state machine.
//!
//! One record in shared storage drives every open tab. Each tab ticks its
//! own copy once per second while the session runs and persists the result;
//! the storage change event tells the other tabs to reload. There is no
//! lock: the last writer wins, and a tick lost to a same-instant write from
//! another tab is acceptable for a countdown display.
//!
//! All operations take the current wall clock as an explicit argument so the
//! machine stays platform-neutral and testable off the browser.

use serde::{Deserialize, Serialize};

/// Seconds of elapsed study time that earn one XP grant.
pub const XP_INTERVAL_SECS: u32 = 120;

/// XP granted per completed interval.
pub const XP_PER_INTERVAL: u32 = 5;

/// XP accrued after `elapsed_seconds` of study time.
pub fn xp_for_elapsed(elapsed_seconds: u32) -> u32 {
    elapsed_seconds / XP_INTERVAL_SECS * XP_PER_INTERVAL
}

/// Render whole seconds as a `MM:SS` clock.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Outcome of advancing the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Nothing moved: paused, or no wall-clock time has passed.
    Unchanged,
    /// The countdown advanced and time remains.
    Advanced,
    /// The countdown reached zero; the session is over.
    Completed,
}

/// Persisted focus session state (localStorage key `focusState`).
///
/// Absence of the record is the Idle state. The field names are camelCase on
/// the wire because the record predates this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusState {
    pub is_running: bool,
    pub is_paused: bool,
    pub remaining_seconds: u32,
    pub elapsed_seconds: u32,
    pub earned_xp: u32,
    /// Wall-clock instant of the last persisted update, epoch milliseconds.
    pub last_update: i64,
}

impl FocusState {
    /// Fresh running session with `duration_secs` on the clock.
    pub fn start(duration_secs: u32, now_ms: i64) -> Self {
        Self {
            is_running: true,
            is_paused: false,
            remaining_seconds: duration_secs,
            elapsed_seconds: 0,
            earned_xp: 0,
            last_update: now_ms,
        }
    }

    /// Actively counting down: running and not paused.
    pub fn is_active(&self) -> bool {
        self.is_running && !self.is_paused
    }

    /// Pause or resume. The tracker never originates the flag on its own;
    /// this is driven by the focus view or by another tab's write.
    pub fn set_paused(&mut self, paused: bool, now_ms: i64) {
        self.is_paused = paused;
        self.last_update = now_ms;
    }

    /// One-second local tick.
    pub fn tick(&mut self, now_ms: i64) -> Progress {
        self.advance(1, now_ms)
    }

    /// Wall-clock catch-up after a tab was inactive, closed, or has just
    /// loaded the record another tab wrote. Zero or negative deltas are
    /// ignored; the clock never runs backwards.
    pub fn reconcile(&mut self, now_ms: i64) -> Progress {
        let delta_secs = (now_ms - self.last_update) / 1000;
        if delta_secs <= 0 {
            return Progress::Unchanged;
        }
        let delta = u32::try_from(delta_secs).unwrap_or(u32::MAX);
        self.advance(delta, now_ms)
    }

    fn advance(&mut self, delta_secs: u32, now_ms: i64) -> Progress {
        if !self.is_active() {
            return Progress::Unchanged;
        }
        if self.remaining_seconds == 0 {
            return Progress::Completed;
        }
        // Elapsed time only accrues for seconds actually counted down, so
        // elapsed + remaining is conserved even across long gaps.
        let counted = delta_secs.min(self.remaining_seconds);
        self.remaining_seconds -= counted;
        self.elapsed_seconds += counted;
        self.earned_xp = xp_for_elapsed(self.elapsed_seconds);
        self.last_update = now_ms;
        if self.remaining_seconds == 0 {
            Progress::Completed
        } else {
            Progress::Advanced
        }
    }

    /// Whole minutes of study time to report to the backend on completion.
    pub fn duration_minutes(&self) -> u32 {
        self.elapsed_seconds / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_000_000;

    #[test]
    fn test_xp_rate() {
        assert_eq!(xp_for_elapsed(0), 0);
        assert_eq!(xp_for_elapsed(119), 0);
        assert_eq!(xp_for_elapsed(120), 5);
        assert_eq!(xp_for_elapsed(125), 5);
        assert_eq!(xp_for_elapsed(239), 5);
        assert_eq!(xp_for_elapsed(240), 10);
    }

    #[test]
    fn test_tick_counts_down_and_accrues_xp() {
        let mut state = FocusState::start(300, T0);
        for i in 1..=125 {
            let outcome = state.tick(T0 + i * 1000);
            assert_eq!(outcome, Progress::Advanced);
        }
        assert_eq!(state.remaining_seconds, 175);
        assert_eq!(state.elapsed_seconds, 125);
        assert_eq!(state.earned_xp, 5);
        assert_eq!(state.last_update, T0 + 125_000);
    }

    #[test]
    fn test_tick_reports_completion_on_reaching_zero() {
        let mut state = FocusState::start(2, T0);
        assert_eq!(state.tick(T0 + 1000), Progress::Advanced);
        assert_eq!(state.tick(T0 + 2000), Progress::Completed);
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.elapsed_seconds, 2);
    }

    #[test]
    fn test_paused_state_never_advances() {
        let mut state = FocusState::start(600, T0);
        state.set_paused(true, T0);
        assert_eq!(state.tick(T0 + 1000), Progress::Unchanged);
        // A week of wall clock passes while paused.
        assert_eq!(state.reconcile(T0 + 7 * 86_400_000), Progress::Unchanged);
        assert_eq!(state.remaining_seconds, 600);
        assert_eq!(state.elapsed_seconds, 0);

        state.set_paused(false, T0 + 7 * 86_400_000);
        assert_eq!(state.tick(T0 + 7 * 86_400_000 + 1000), Progress::Advanced);
        assert_eq!(state.remaining_seconds, 599);
    }

    #[test]
    fn test_reconcile_catches_up_elapsed_wall_clock() {
        let mut state = FocusState::start(600, T0);
        assert_eq!(state.reconcile(T0 + 130_000), Progress::Advanced);
        assert_eq!(state.remaining_seconds, 470);
        assert_eq!(state.elapsed_seconds, 130);
        assert_eq!(state.earned_xp, 5);
        assert_eq!(state.last_update, T0 + 130_000);
    }

    #[test]
    fn test_reconcile_past_deadline_completes_once() {
        // remaining=10 with a last update 15s in the past: the reload lands
        // on zero and reports completion exactly once.
        let mut state = FocusState {
            is_running: true,
            is_paused: false,
            remaining_seconds: 10,
            elapsed_seconds: 290,
            earned_xp: 10,
            last_update: T0,
        };
        assert_eq!(state.reconcile(T0 + 15_000), Progress::Completed);
        assert_eq!(state.remaining_seconds, 0);
        // Only the ten seconds actually on the clock count as study time.
        assert_eq!(state.elapsed_seconds, 300);
        assert_eq!(state.earned_xp, 10);

        // A second reconcile of the same record does not re-advance.
        assert_eq!(state.reconcile(T0 + 30_000), Progress::Completed);
        assert_eq!(state.elapsed_seconds, 300);
    }

    #[test]
    fn test_reconcile_ignores_backwards_clock() {
        let mut state = FocusState::start(600, T0);
        assert_eq!(state.reconcile(T0 - 5_000), Progress::Unchanged);
        assert_eq!(state.reconcile(T0), Progress::Unchanged);
        assert_eq!(state.remaining_seconds, 600);
        assert_eq!(state.last_update, T0);
    }

    #[test]
    fn test_elapsed_plus_remaining_is_conserved() {
        let mut state = FocusState::start(1500, T0);
        state.tick(T0 + 1000);
        state.reconcile(T0 + 90_000);
        state.tick(T0 + 91_000);
        assert_eq!(state.elapsed_seconds + state.remaining_seconds, 1500);
    }

    #[test]
    fn test_duration_minutes_rounds_down() {
        let mut state = FocusState::start(600, T0);
        state.reconcile(T0 + 150_000);
        assert_eq!(state.duration_minutes(), 2);
    }

    #[test]
    fn test_stored_record_uses_camel_case() {
        let json = r#"{
            "isRunning": true,
            "isPaused": false,
            "remainingSeconds": 1200,
            "elapsedSeconds": 300,
            "earnedXp": 10,
            "lastUpdate": 1700000000000
        }"#;
        let state: FocusState = serde_json::from_str(json).unwrap();
        assert!(state.is_active());
        assert_eq!(state.remaining_seconds, 1200);

        let out = serde_json::to_value(&state).unwrap();
        assert_eq!(out["remainingSeconds"], 1200);
        assert_eq!(out["lastUpdate"], 1_700_000_000_000u64);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(3599), "59:59");
    }
}
