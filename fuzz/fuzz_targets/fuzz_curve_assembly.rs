#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use spline_reveal::app::{InteractionController, RevealSettings};
use spline_reveal::shared::options::{STEP_SIZE_MAX, STEP_SIZE_MIN};
use spline_reveal::shared::sample_count;
use spline_reveal::{assemble_curve, CurveError, CurveFamily};

// Erstes Byte: Schrittweite. Danach Dreiergruppen als Anfragen:
// Klick, Rechtsklick, Moduswechsel, Neuberechnung, Tick.
fuzz_target!(|data: &[u8]| {
    let Some((&step_byte, ops)) = data.split_first() else {
        return;
    };
    let step = (step_byte as f32 / 255.0).clamp(STEP_SIZE_MIN, STEP_SIZE_MAX);
    let settings = RevealSettings {
        step_size: step,
        ..RevealSettings::default()
    };
    let mut ctrl = InteractionController::new(settings, CurveFamily::default());

    for chunk in ops.chunks_exact(3) {
        let (op, x, y) = (chunk[0], chunk[1], chunk[2]);
        let position = Vec2::new(x as f32 / 127.5 - 1.0, y as f32 / 127.5 - 1.0);

        match op % 5 {
            0 => {
                let _ = ctrl.add_control_point(position);
            }
            1 => ctrl.remove_control_point(),
            2 => {
                let _ = ctrl.cycle_family();
            }
            3 => {
                let _ = ctrl.reinterpolate();
            }
            _ => {
                let moved = ctrl.tick();
                assert!(moved <= ctrl.settings().batch_size);
            }
        }

        let len = ctrl.control_points().len();
        assert_eq!(ctrl.window_cursor(), len.max(3) - 2);
        assert_eq!(ctrl.ledger().len(), len.saturating_sub(1));
    }

    let plain = ctrl.control_points().tail_from(1);
    for family in CurveFamily::ALL {
        match assemble_curve(&plain, family, step) {
            Ok(assembly) => {
                assert_eq!(
                    assembly.point_count(),
                    assembly.segments().len() * sample_count(step)
                );
            }
            Err(CurveError::PrematureInterpolation { available, required }) => {
                assert!(available < required);
            }
            Err(e) => panic!("unerwarteter Fehler: {e}"),
        }
    }
});
