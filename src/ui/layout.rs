use crate::QuizApp;
use egui::{Button, Color32, Context, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Начать заново").clicked() {
                app.restart_test();
            }
            if app.in_mistakes_mode() {
                ui.label(format!(
                    "Работа над ошибками: {} вопросов",
                    app.session.mistake_questions.len()
                ));
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Тёмная тема").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Светлая тема").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Two equally sized buttons in one centered row; returns (left, right).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Percentage color used on the results screen: ≥80 green, ≥60 amber.
pub fn percentage_color(percentage: u8) -> Color32 {
    if percentage >= 80 {
        Color32::from_rgb(0x27, 0xae, 0x60)
    } else if percentage >= 60 {
        Color32::from_rgb(0xf3, 0x9c, 0x12)
    } else {
        Color32::from_rgb(0xe7, 0x4c, 0x3c)
    }
}
