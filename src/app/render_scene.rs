//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        control_points: state.interaction.control_points().extract_render_buffer(),
        curve_points: state.interaction.curve().extract_render_buffer(),
        control_point_size_px: state.options.control_point_size_px,
        curve_point_size_px: state.options.curve_point_size_px,
        viewport_size,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn scene_contains_bootstrap_duplicate_and_sizes() {
        let mut state = AppState::new();
        state
            .interaction
            .add_control_point(Vec2::new(0.1, 0.2))
            .expect("erster Punkt");

        let scene = build(&state, [800.0, 600.0]);

        assert_eq!(scene.control_points.len(), 2);
        assert!(scene.curve_points.is_empty());
        assert_eq!(scene.control_point_size_px, 10.0);
        assert_eq!(scene.curve_point_size_px, 6.0);
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
    }

    #[test]
    fn pending_points_are_not_drawn() {
        let mut state = AppState::new();
        for p in [Vec2::ZERO, Vec2::new(0.5, 0.5), Vec2::new(-0.5, 0.5)] {
            state.interaction.add_control_point(p).expect("Punkt");
        }
        assert!(!state.interaction.pending().is_empty());

        let scene = build(&state, [800.0, 600.0]);
        assert!(scene.curve_points.is_empty());

        state.interaction.tick();
        let scene = build(&state, [800.0, 600.0]);
        assert_eq!(scene.curve_points.len(), 35);
        assert_eq!(scene.point_count(), 4 + 35);
    }
}
