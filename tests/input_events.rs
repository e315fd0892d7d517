use egui::{Key, Modifiers, Pos2, Rect, vec2};
use sketchbook::{InputEvent, InputHandler};

fn key_press(key: Key, modifiers: Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn canvas_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0))
}

#[test]
fn key_presses_reach_the_canvas_by_default() {
    let ctx = egui::Context::default();
    let mut handler = InputHandler::new(canvas_rect());

    let mut raw = egui::RawInput::default();
    raw.events.push(key_press(Key::Z, Modifiers::COMMAND));
    ctx.run(raw, |ctx| {
        let events = handler.process_input(ctx);
        assert!(
            events
                .iter()
                .any(|event| matches!(event, InputEvent::KeyDown { key: Key::Z, .. }))
        );
    });
}

#[test]
fn key_presses_are_muted_while_a_text_field_has_focus() {
    let ctx = egui::Context::default();
    let mut handler = InputHandler::new(canvas_rect());
    let mut label = String::new();

    // First frame: a text edit grabs keyboard focus.
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.text_edit_singleline(&mut label).request_focus();
        });
    });

    // Second frame: Ctrl+Z arrives while the field still holds focus. It
    // belongs to the text edit, so no shortcut event may come out.
    let mut raw = egui::RawInput::default();
    raw.events.push(key_press(Key::Z, Modifiers::COMMAND));
    let _ = ctx.run(raw, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.text_edit_singleline(&mut label);
        });
        let events = handler.process_input(ctx);
        assert!(
            !events
                .iter()
                .any(|event| matches!(event, InputEvent::KeyDown { .. }))
        );
    });
}
