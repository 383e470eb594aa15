//! Debounce-Tick mit höchstens einer ausstehenden Ausführung.

use std::time::Duration;

/// Einzel-Slot-Scheduler für den Update-Tick.
///
/// `schedule_tick` bei bereits ausstehendem Tick ist ein No-op; `take_due`
/// löscht das Pending-Flag bevor der Tick-Body läuft, sodass der Body selbst
/// einen neuen Tick anmelden kann.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    due_at: Option<Duration>,
}

impl TickScheduler {
    /// Erstellt einen Scheduler ohne ausstehenden Tick.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due_at: None,
        }
    }

    /// Meldet einen Tick `interval` nach `now` an, falls keiner aussteht.
    ///
    /// Gibt `true` zurück, wenn ein neuer Tick angemeldet wurde.
    pub fn schedule_tick(&mut self, now: Duration) -> bool {
        if self.due_at.is_some() {
            return false;
        }
        self.due_at = Some(now + self.interval);
        true
    }

    /// Verwirft einen ausstehenden Tick.
    pub fn cancel_tick(&mut self) -> bool {
        self.due_at.take().is_some()
    }

    /// Steht ein Tick aus?
    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Fälligkeitszeitpunkt des ausstehenden Ticks.
    pub fn due_at(&self) -> Option<Duration> {
        self.due_at
    }

    /// Verbraucht den Tick, wenn er zu `now` fällig ist.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ändert das Intervall; ein ausstehender Tick behält seinen Zeitpunkt.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}
