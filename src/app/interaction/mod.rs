//! Interaktions-Zustandsmaschine: Kontrollpunkte, sichtbare Kurve, Reveal-Puffer.
//!
//! Klicks und Tasten werden nur im Zustand `Idle` angenommen. Jeder Tick
//! bewegt höchstens `batch_size` Punkte, entweder vom Reveal-Puffer auf die
//! Kurve oder beim Löschen von der Kurve weg.
//!
//! Der erste Klick legt den Startpunkt doppelt ab. Die Segment-Funktionen
//! arbeiten auf den echten Punkten (ohne das Duplikat), der Fenster-Cursor
//! zählt dagegen in der Folge mit Duplikat: `cursor = max(len, 3) - 2`.


use glam::Vec2;

use crate::core::{
    CurveError, CurveFamily, CurvePoint, PointSequence, CONTROL_POINT_COLOR, CURVE_POINT_COLOR,
};
use crate::shared::options::{DemoOptions, REVEAL_BATCH_SIZE};
use crate::shared::{assemble_appended, assemble_curve, CurveAssembly, DEFAULT_STEP_SIZE};

/// Länge der Kontrollpunktfolge direkt nach dem ersten Klick.
const BOOTSTRAP_LEN: usize = 2;
/// Ab dieser Länge (inklusive Duplikat) gibt es eine Kurve.
const FIRST_CURVE_LEN: usize = 4;
/// Startwert des Fenster-Cursors.
const INITIAL_CURSOR: usize = 1;

/// Laufzeit-Einstellungen der Interaktion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSettings {
    pub step_size: f32,
    pub batch_size: usize,
    pub control_color: [f32; 4],
    pub curve_color: [f32; 4],
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            batch_size: REVEAL_BATCH_SIZE,
            control_color: CONTROL_POINT_COLOR,
            curve_color: CURVE_POINT_COLOR,
        }
    }
}

impl RevealSettings {
    /// Übernimmt die relevanten Werte aus den Optionen.
    pub fn from_options(options: &DemoOptions) -> Self {
        Self {
            step_size: options.step_size,
            batch_size: options.reveal_batch_size.max(1),
            control_color: options.control_point_color,
            curve_color: options.curve_point_color,
        }
    }
}

/// Animationszustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Wartet auf Eingaben
    #[default]
    Idle,
    /// Reveal-Puffer wird auf die Kurve übertragen
    Interpolating,
    /// Kurvenpunkte werden vom Ende her entfernt
    Erasing { remaining: usize },
}

/// Besitzt Kontrollpunkte, Kurve und Reveal-Puffer und treibt die Animation.
#[derive(Debug, Clone)]
pub struct InteractionController {
    control: PointSequence,
    curve: PointSequence,
    pending: PointSequence,
    phase: RevealPhase,
    family: CurveFamily,
    window_cursor: usize,
    /// Erzeugte Kurvenpunkte je echtem Kontrollpunkt
    ledger: Vec<usize>,
    settings: RevealSettings,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(RevealSettings::default(), CurveFamily::default())
    }
}

impl InteractionController {
    /// Erstellt einen leeren Controller im Zustand `Idle`.
    pub fn new(settings: RevealSettings, family: CurveFamily) -> Self {
        Self {
            control: PointSequence::new(),
            curve: PointSequence::new(),
            pending: PointSequence::new(),
            phase: RevealPhase::Idle,
            family,
            window_cursor: INITIAL_CURSOR,
            ledger: Vec::new(),
            settings,
        }
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    /// Kontrollpunkte inklusive doppeltem Startpunkt.
    pub fn control_points(&self) -> &PointSequence {
        &self.control
    }

    /// Bereits aufgedeckte Kurvenpunkte.
    pub fn curve(&self) -> &PointSequence {
        &self.curve
    }

    /// Noch aufzudeckende Punkte (Ende = nächster Punkt).
    pub fn pending(&self) -> &PointSequence {
        &self.pending
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn window_cursor(&self) -> usize {
        self.window_cursor
    }

    pub fn settings(&self) -> &RevealSettings {
        &self.settings
    }

    /// Erzeugte Kurvenpunkte je echtem Kontrollpunkt.
    pub fn ledger(&self) -> &[usize] {
        &self.ledger
    }

    /// `true`, solange eine Animation läuft.
    pub fn is_busy(&self) -> bool {
        self.phase != RevealPhase::Idle
    }

    // ── Anfragen ────────────────────────────────────────────────────

    /// Hängt einen Kontrollpunkt an und stößt ggf. das Aufdecken neuer Segmente an.
    pub fn add_control_point(&mut self, position: Vec2) -> Result<(), CurveError> {
        if self.reject_when_busy("Kontrollpunkt hinzufügen") {
            return Ok(());
        }

        let point = CurvePoint::new(position, self.settings.control_color);
        if self.control.is_empty() {
            self.control.push(point);
            self.control.push(point);
            self.ledger.push(0);
            return Ok(());
        }

        self.control.push(point);
        if self.control.len() < FIRST_CURVE_LEN {
            self.ledger.push(0);
            return Ok(());
        }

        let plain = self.plain_control_points();
        let assembly = match assemble_appended(
            &plain,
            self.window_cursor - 1,
            self.family,
            self.settings.step_size,
        ) {
            Ok(assembly) => assembly,
            Err(e) => {
                self.control.pop();
                return Err(e);
            }
        };

        self.window_cursor += 1;
        self.ledger.push(assembly.point_count());
        self.begin_reveal(assembly);
        Ok(())
    }

    /// Entfernt den letzten Kontrollpunkt und löscht die zugehörigen Kurvenpunkte.
    pub fn remove_control_point(&mut self) {
        if self.reject_when_busy("Kontrollpunkt entfernen") {
            return;
        }

        match self.control.len() {
            0 => {}
            BOOTSTRAP_LEN => {
                self.control.clear();
                self.ledger.clear();
                self.window_cursor = INITIAL_CURSOR;
            }
            len => {
                self.control.pop();
                let quota = self.ledger.pop().unwrap_or(0);
                if len >= FIRST_CURVE_LEN {
                    self.window_cursor = self.window_cursor.saturating_sub(1).max(INITIAL_CURSOR);
                }
                if quota > 0 && !self.curve.is_empty() {
                    log::debug!("Lösche {} Kurvenpunkte", quota);
                    self.phase = RevealPhase::Erasing { remaining: quota };
                }
            }
        }
    }

    /// Schaltet zur nächsten Kurvenfamilie und berechnet die Kurve neu.
    pub fn cycle_family(&mut self) -> Result<(), CurveError> {
        if self.reject_when_busy("Kurvenfamilie wechseln") {
            return Ok(());
        }
        self.family = self.family.next();
        log::info!("Kurvenfamilie: {}", self.family.label());
        self.rebuild_curve()
    }

    /// Berechnet die komplette Kurve mit der aktuellen Familie neu.
    pub fn reinterpolate(&mut self) -> Result<(), CurveError> {
        if self.reject_when_busy("Neu interpolieren") {
            return Ok(());
        }
        self.rebuild_curve()
    }

    /// Ein Animationsschritt. Gibt die Anzahl bewegter Punkte zurück.
    pub fn tick(&mut self) -> usize {
        match self.phase {
            RevealPhase::Idle => 0,
            RevealPhase::Interpolating => {
                let mut moved = 0;
                while moved < self.settings.batch_size {
                    let Some(point) = self.pending.pop() else {
                        break;
                    };
                    self.curve.push(point);
                    moved += 1;
                }
                if self.pending.is_empty() {
                    log::debug!("Kurve vollständig aufgedeckt ({} Punkte)", self.curve.len());
                    self.phase = RevealPhase::Idle;
                }
                moved
            }
            RevealPhase::Erasing { remaining } => {
                let mut removed = 0;
                while removed < remaining.min(self.settings.batch_size) {
                    if self.curve.pop().is_none() {
                        break;
                    }
                    removed += 1;
                }
                let remaining = remaining - removed;
                self.phase = if remaining == 0 || self.curve.is_empty() {
                    log::debug!("Löschen abgeschlossen ({} Punkte übrig)", self.curve.len());
                    RevealPhase::Idle
                } else {
                    RevealPhase::Erasing { remaining }
                };
                removed
            }
        }
    }

    // ── Intern ──────────────────────────────────────────────────────

    fn reject_when_busy(&self, request: &str) -> bool {
        if self.is_busy() {
            log::debug!("{} ignoriert: Animation läuft ({:?})", request, self.phase);
            return true;
        }
        false
    }

    /// Kontrollpunkte ohne das Duplikat des Startpunkts.
    fn plain_control_points(&self) -> PointSequence {
        self.control.tail_from(1)
    }

    fn begin_reveal(&mut self, assembly: CurveAssembly) {
        if assembly.is_empty() {
            return;
        }
        self.pending = assembly.into_pending(self.settings.curve_color);
        self.phase = RevealPhase::Interpolating;
    }

    fn rebuild_curve(&mut self) -> Result<(), CurveError> {
        self.curve.clear();
        self.pending.clear();

        let plain = self.plain_control_points();
        match assemble_curve(&plain, self.family, self.settings.step_size) {
            Ok(assembly) => {
                self.ledger = assembly.points_per_owner(plain.len());
                self.begin_reveal(assembly);
                Ok(())
            }
            Err(CurveError::PrematureInterpolation {
                available,
                required,
            }) => {
                log::debug!(
                    "Neuberechnung übersprungen: {} von {} Kontrollpunkten",
                    available,
                    required
                );
                self.ledger = vec![0; plain.len()];
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
