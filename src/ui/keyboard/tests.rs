use super::*;

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = match &event {
        egui::Event::Key { modifiers, .. } => *modifiers,
        _ => egui::Modifiers::default(),
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn test_escape_requests_exit() {
    let events = collect_with_key_event(key_press(egui::Key::Escape, egui::Modifiers::default()));

    assert_eq!(events, vec![AppIntent::ExitRequested]);
}

#[test]
fn test_q_requests_exit_with_and_without_shift() {
    let events = collect_with_key_event(key_press(egui::Key::Q, egui::Modifiers::default()));
    assert_eq!(events, vec![AppIntent::ExitRequested]);

    let events = collect_with_key_event(key_press(egui::Key::Q, egui::Modifiers::SHIFT));
    assert_eq!(events, vec![AppIntent::ExitRequested]);
}

#[test]
fn test_space_cycles_curve_family() {
    let events = collect_with_key_event(key_press(egui::Key::Space, egui::Modifiers::default()));

    assert_eq!(events, vec![AppIntent::CycleCurveFamilyRequested]);
}

#[test]
fn test_lowercase_r_reinterpolates() {
    let events = collect_with_key_event(key_press(egui::Key::R, egui::Modifiers::default()));

    assert_eq!(events, vec![AppIntent::ReinterpolateRequested]);
}

#[test]
fn test_shift_r_is_ignored() {
    let events = collect_with_key_event(key_press(egui::Key::R, egui::Modifiers::SHIFT));

    assert!(events.is_empty());
}

#[test]
fn test_key_release_is_ignored() {
    let events = collect_with_key_event(egui::Event::Key {
        key: egui::Key::Space,
        physical_key: None,
        pressed: false,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    });

    assert!(events.is_empty());
}
