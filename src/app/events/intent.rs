/// Maustaste eines Klicks im Zeichenbereich.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Kontrollpunkt setzen
    Primary,
    /// Rechte Taste: letzten Kontrollpunkt entfernen
    Secondary,
    /// Mittlere Taste: ohne Funktion
    Tertiary,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste im Zeichenbereich gedrückt (Position in NDC)
    PointerPressed {
        button: PointerButton,
        ndc: glam::Vec2,
    },
    /// Nächste Kurvenfamilie wählen (Leertaste)
    CycleCurveFamilyRequested,
    /// Kurve komplett neu berechnen ('r')
    ReinterpolateRequested,
    /// Anwendung beenden (Escape, 'q')
    ExitRequested,
    /// Seit dem letzten Frame vergangene Zeit
    FrameAdvanced { dt_seconds: f32 },
}
