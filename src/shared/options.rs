//! Zentrale Konfiguration der Kurven-Demo.
//!
//! `DemoOptions` enthält alle beim Start einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use super::curve_geometry::DEFAULT_STEP_SIZE;
use crate::core::{CurveFamily, CONTROL_POINT_COLOR, CURVE_POINT_COLOR};

// ── Abtastung ───────────────────────────────────────────────────────

/// Kleinste zulässige Schrittweite (1000 Samples pro Fenster).
pub const STEP_SIZE_MIN: f32 = 0.001;
/// Größte zulässige Schrittweite (ein Sample pro Fenster).
pub const STEP_SIZE_MAX: f32 = 1.0;

// ── Animation ───────────────────────────────────────────────────────

/// Kurvenpunkte, die pro Animations-Tick aufgedeckt oder entfernt werden.
pub const REVEAL_BATCH_SIZE: usize = 35;
/// Tick-Intervall in Millisekunden (60 Ticks pro Sekunde).
pub const FRAME_RATE_MS: f32 = 1000.0 / 60.0;
/// Höchstens so viele Ticks werden pro Frame nachgeholt.
pub const MAX_TICKS_PER_FRAME: u32 = 8;

// ── Darstellung ─────────────────────────────────────────────────────

/// Kantenlänge der Kontrollpunkte in Pixeln.
pub const CONTROL_POINT_SIZE_PX: f32 = 10.0;
/// Kantenlänge der Kurvenpunkte in Pixeln.
pub const CURVE_POINT_SIZE_PX: f32 = 6.0;
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstertitel.
pub const WINDOW_TITLE: &str = "Curves";
/// Standard-Fenstergröße [Breite, Höhe] in logischen Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 800.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Einstellungen der Demo.
/// Wird als `spline_reveal.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Schrittweite des Kurvenparameters (Samples pro Fenster = round(1 / step))
    pub step_size: f32,
    /// Kurvenfamilie beim Start
    pub initial_family: CurveFamily,

    // ── Animation ───────────────────────────────────────────────
    /// Punkte pro Tick beim Aufdecken und Entfernen
    pub reveal_batch_size: usize,
    /// Tick-Intervall in Millisekunden
    pub frame_interval_ms: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub control_point_color: [f32; 4],
    pub curve_point_color: [f32; 4],
    pub background_color: [f32; 4],

    // ── Punktgrößen ─────────────────────────────────────────────
    pub control_point_size_px: f32,
    pub curve_point_size_px: f32,

    // ── Fenster ─────────────────────────────────────────────────
    pub window_size: [f32; 2],
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            initial_family: CurveFamily::default(),

            reveal_batch_size: REVEAL_BATCH_SIZE,
            frame_interval_ms: FRAME_RATE_MS,

            control_point_color: CONTROL_POINT_COLOR,
            curve_point_color: CURVE_POINT_COLOR,
            background_color: BACKGROUND_COLOR,

            control_point_size_px: CONTROL_POINT_SIZE_PX,
            curve_point_size_px: CURVE_POINT_SIZE_PX,

            window_size: WINDOW_SIZE,
        }
    }
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<DemoOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline-reveal"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_reveal.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Defaults bzw. klemmt sie in den gültigen Bereich.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        self.step_size = if self.step_size.is_finite() {
            self.step_size.clamp(STEP_SIZE_MIN, STEP_SIZE_MAX)
        } else {
            defaults.step_size
        };
        if self.reveal_batch_size == 0 {
            log::warn!("reveal_batch_size = 0 ist ungültig, verwende {}", REVEAL_BATCH_SIZE);
            self.reveal_batch_size = defaults.reveal_batch_size;
        }
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms > 0.0) {
            self.frame_interval_ms = defaults.frame_interval_ms;
        }
        if !positive(self.control_point_size_px) {
            self.control_point_size_px = defaults.control_point_size_px;
        }
        if !positive(self.curve_point_size_px) {
            self.curve_point_size_px = defaults.curve_point_size_px;
        }
        if !self.window_size.iter().copied().all(positive) {
            self.window_size = defaults.window_size;
        }
        for color in [
            &mut self.control_point_color,
            &mut self.curve_point_color,
            &mut self.background_color,
        ] {
            for channel in color.iter_mut() {
                *channel = if channel.is_finite() {
                    channel.clamp(0.0, 1.0)
                } else {
                    1.0
                };
            }
        }
        self
    }

    /// Tick-Intervall in Sekunden.
    pub fn tick_interval_secs(&self) -> f32 {
        self.frame_interval_ms / 1000.0
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_demo_constants() {
        let opts = DemoOptions::default();
        assert_relative_eq!(opts.step_size, 0.02);
        assert_eq!(opts.reveal_batch_size, 35);
        assert_eq!(opts.initial_family, CurveFamily::CatmullRom);
        assert_eq!(opts.background_color, [1.0, 1.0, 1.0, 1.0]);
        assert_relative_eq!(opts.tick_interval_secs(), 1.0 / 60.0, epsilon = 1e-6);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: DemoOptions = toml::from_str(
            r#"
            step_size = 0.05
            initial_family = "Bezier"
            "#,
        )
        .expect("Teil-TOML muss lesbar sein");
        assert_relative_eq!(opts.step_size, 0.05);
        assert_eq!(opts.initial_family, CurveFamily::Bezier);
        assert_eq!(opts.reveal_batch_size, REVEAL_BATCH_SIZE);
        assert_eq!(opts.curve_point_color, CURVE_POINT_COLOR);
    }

    #[test]
    fn validated_repairs_broken_values() {
        let opts = DemoOptions {
            step_size: 0.0,
            reveal_batch_size: 0,
            frame_interval_ms: -5.0,
            curve_point_size_px: f32::NAN,
            window_size: [0.0, 600.0],
            control_point_color: [2.0, -1.0, 0.5, 1.0],
            ..DemoOptions::default()
        }
        .validated();

        assert_relative_eq!(opts.step_size, STEP_SIZE_MIN);
        assert_eq!(opts.reveal_batch_size, REVEAL_BATCH_SIZE);
        assert_relative_eq!(opts.frame_interval_ms, FRAME_RATE_MS);
        assert_relative_eq!(opts.curve_point_size_px, CURVE_POINT_SIZE_PX);
        assert_eq!(opts.window_size, WINDOW_SIZE);
        assert_eq!(opts.control_point_color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn save_and_load_keep_values() {
        let path = std::env::temp_dir().join(format!(
            "spline_reveal_options_{}.toml",
            std::process::id()
        ));
        let opts = DemoOptions {
            step_size: 0.1,
            reveal_batch_size: 12,
            initial_family: CurveFamily::UniformBSpline,
            ..DemoOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern muss klappen");
        let loaded = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("spline_reveal_does_not_exist.toml");
        assert_eq!(DemoOptions::load_from_file(&path), DemoOptions::default());
    }
}
