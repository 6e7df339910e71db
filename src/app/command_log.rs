//! Begrenztes Protokoll der ausgeführten Commands.

use std::collections::VecDeque;

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
///
/// Per-Frame-Commands (Animations-Uhr) werden nur gezählt, nicht gespeichert.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
    frame_commands: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Log, das höchstens `capacity` Einträge behält.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            frame_commands: 0,
        }
    }

    /// Fügt einen ausgeführten Command hinzu; der älteste fällt bei voller Kapazität heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if command.is_per_frame() {
            self.frame_commands += 1;
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter (nicht per Frame anfallender) Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Anzahl verarbeiteter Per-Frame-Commands.
    pub fn frame_commands(&self) -> u64 {
        self.frame_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entry_is_dropped_at_capacity() {
        let mut log = CommandLog::with_capacity(2);
        log.record(&AppCommand::RemoveControlPoint);
        log.record(&AppCommand::Reinterpolate);
        log.record(&AppCommand::CycleCurveFamily);

        let entries: Vec<_> = log.entries().cloned().collect();
        assert_eq!(
            entries,
            vec![AppCommand::Reinterpolate, AppCommand::CycleCurveFamily]
        );
    }

    #[test]
    fn frame_commands_are_only_counted() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::AdvanceAnimation { dt_seconds: 0.016 });
        log.record(&AppCommand::AdvanceAnimation { dt_seconds: 0.016 });

        assert!(log.is_empty());
        assert_eq!(log.frame_commands(), 2);
    }
}
