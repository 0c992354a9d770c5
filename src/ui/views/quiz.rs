use crate::QuizApp;
use crate::app::GridCell;
use crate::app::queries::format_time;
use crate::model::QuestionStatus;
use crate::ui::views::question::ui_question;
use egui::{Button, CentralPanel, Color32, Context, ProgressBar, RichText, ScrollArea, Ui};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 700.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 12))
            .show(ui, |ui| {
                ui.set_width(panel_width);

                header(app, ui);

                let total = app.total_questions();
                let fill = (app.session.current_question + 1) as f32 / total.max(1) as f32;
                ui.add(ProgressBar::new(fill).desired_width(panel_width));
                ui.add_space(10.0);

                ScrollArea::vertical().show(ui, |ui| {
                    let number = app.question_number(app.session.current_question);
                    let working = app.working_answer();
                    let edited = ui_question(ui, app.current_question(), number, working);
                    if let Some(answer) = edited {
                        app.record_answer(answer);
                    }

                    ui.add_space(14.0);
                    navigation_row(app, ui);

                    if app.in_mistakes_mode() {
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(
                                "Режим работы над ошибками: вы повторяете вопросы, \
                                 в которых допустили ошибки в основном тесте",
                            )
                            .italics(),
                        );
                    }

                    if !app.message.is_empty() {
                        ui.add_space(6.0);
                        ui.label(&app.message);
                    }
                });
            });
    });
}

fn header(app: &QuizApp, ui: &mut Ui) {
    let title = if app.in_mistakes_mode() {
        "Работа над ошибками"
    } else {
        "Тест по физике"
    };
    ui.heading(title);
    ui.horizontal(|ui| {
        ui.label(format!(
            "Вопрос {} из {}",
            app.question_number(app.session.current_question),
            app.total_questions()
        ));
        ui.separator();
        ui.label(format!("Время: {}", format_time(app.session.time_spent)));
    });
    ui.add_space(6.0);
}

fn navigation_row(app: &mut QuizApp, ui: &mut Ui) {
    let mut go_back = false;
    let mut go_next = false;
    let mut jump: Option<usize> = None;

    ui.horizontal(|ui| {
        go_back = ui
            .add_enabled(
                app.session.current_question > 0,
                Button::new("← Назад"),
            )
            .clicked();

        jump = question_grid(ui, &app.grid_cells());

        let next_label = if app.on_last_question() {
            "Завершить"
        } else {
            "Далее →"
        };
        go_next = ui.button(next_label).clicked();
    });

    if go_back {
        app.prev_question();
    }
    if let Some(pos) = jump {
        app.go_to_question(pos);
    }
    if go_next {
        app.next_question();
    }
}

/// The question-grid navigator; every cell is a valid jump target.
fn question_grid(ui: &mut Ui, cells: &[GridCell]) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for cell in cells {
            let mut button = Button::new(cell.number.to_string());
            if let Some(fill) = status_fill(cell.status) {
                button = button.fill(fill);
            }
            if ui
                .add(button)
                .on_hover_text(format!("Вопрос {}", cell.number))
                .clicked()
            {
                clicked = Some(cell.pos);
            }
        }
    });
    clicked
}

fn status_fill(status: QuestionStatus) -> Option<Color32> {
    match status {
        QuestionStatus::Current => Some(Color32::from_rgb(0x2c, 0x70, 0xc9)),
        QuestionStatus::Correct => Some(Color32::from_rgb(0x1e, 0x7a, 0x46)),
        QuestionStatus::Incorrect => Some(Color32::from_rgb(0x8f, 0x2d, 0x2d)),
        QuestionStatus::Unanswered => None,
    }
}
