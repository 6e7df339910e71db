/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt an NDC-Position anhängen
    AddControlPoint { position: glam::Vec2 },
    /// Letzten Kontrollpunkt entfernen
    RemoveControlPoint,
    /// Kurvenfamilie weiterschalten und Kurve neu aufbauen
    CycleCurveFamily,
    /// Kurve mit aktueller Familie neu aufbauen
    Reinterpolate,
    /// Animations-Uhr weiterdrehen und fällige Ticks ausführen
    AdvanceAnimation { dt_seconds: f32 },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// `true` für Commands, die jeden Frame anfallen.
    pub fn is_per_frame(&self) -> bool {
        matches!(self, AppCommand::AdvanceAnimation { .. })
    }
}
