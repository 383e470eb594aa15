//! Zeitgestempeltes Protokoll der ausgeführten Grab-Commands.
//!
//! Jeder Eintrag trägt die Host-Uhr zum Ausführungszeitpunkt. Damit lässt
//! sich z.B. die Kadenz der Update-Passes direkt aus dem Log ablesen.

use std::collections::VecDeque;
use std::time::Duration;

use super::GrabCommand;

/// Obergrenze; ältere Einträge fallen einzeln vorne heraus.
const CAPACITY: usize = 1024;

/// Ein ausgeführter Command mit Zeitstempel der Host-Uhr.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub at: Duration,
    pub command: GrabCommand,
}

#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt `command` mit Zeitstempel `at` an.
    pub fn record(&mut self, at: Duration, command: &GrabCommand) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            at,
            command: command.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Anzahl der Einträge, auf deren Command `pred` zutrifft.
    pub fn count(&self, pred: impl Fn(&GrabCommand) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.command)).count()
    }

    /// Zeitpunkte aller Update-Passes.
    pub fn update_pass_times(&self) -> Vec<Duration> {
        self.entries
            .iter()
            .filter(|e| matches!(e.command, GrabCommand::RunUpdatePass))
            .map(|e| e.at)
            .collect()
    }

    /// Abstände zwischen aufeinanderfolgenden Update-Passes.
    pub fn update_intervals(&self) -> Vec<Duration> {
        self.update_pass_times()
            .windows(2)
            .map(|pair| pair[1].saturating_sub(pair[0]))
            .collect()
    }
}
