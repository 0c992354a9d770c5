use crate::QuizApp;
use crate::app::ReviewRow;
use crate::app::queries::format_time;
use crate::model::{Question, UserAnswer};
use crate::ui::layout::{percentage_color, two_button_row};
use egui::{Button, CentralPanel, Color32, Context, Grid, RichText, ScrollArea, Ui};

const CORRECT_GREEN: Color32 = Color32::from_rgb(0x27, 0xae, 0x60);
const WRONG_RED: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.set_width(panel_width);
                ui.vertical_centered(|ui| {
                    ui.heading("Результаты теста");
                });
                ui.add_space(10.0);

                stats(app, ui);
                ui.add_space(14.0);
                actions(app, ui, panel_width);

                if !app.message.is_empty() {
                    ui.add_space(6.0);
                    ui.label(&app.message);
                }

                if app.show_answers {
                    ui.add_space(14.0);
                    ui.heading("Проверка ответов");
                    ui.add_space(6.0);
                    ScrollArea::vertical().show(ui, |ui| {
                        for row in app.review_rows() {
                            review_item(ui, &app.questions[row.question_index], &row);
                            ui.add_space(10.0);
                        }
                    });
                }
            });
    });
}

fn stats(app: &QuizApp, ui: &mut Ui) {
    let summary = app.results_summary();
    Grid::new("results_stats").spacing([16.0, 4.0]).show(ui, |ui| {
        ui.label("Правильных ответов:");
        ui.label(format!("{} из {}", summary.correct, summary.total));
        ui.end_row();

        ui.label("Процент выполнения:");
        ui.label(
            RichText::new(format!("{}%", summary.percentage))
                .color(percentage_color(summary.percentage))
                .strong(),
        );
        ui.end_row();

        ui.label("Время выполнения:");
        ui.label(format_time(summary.time_spent));
        ui.end_row();

        ui.label("Ошибок:");
        ui.label(summary.mistakes.to_string());
        ui.end_row();
    });
}

fn actions(app: &mut QuizApp, ui: &mut Ui, panel_width: f32) {
    if !app.session.mistake_questions.is_empty() {
        if ui
            .add_sized([panel_width, 36.0], Button::new("Проработать ошибки"))
            .clicked()
        {
            app.start_mistakes_review();
            return;
        }
        ui.add_space(6.0);
    }

    let reveal_label = if app.show_answers {
        "Скрыть ответы"
    } else {
        "Показать ответы"
    };
    let (reveal, restart) = two_button_row(ui, panel_width, reveal_label, "Начать заново");
    if reveal {
        app.show_answers = !app.show_answers;
    }
    if restart {
        app.restart_test();
    }
}

fn review_item(ui: &mut Ui, question: &Question, row: &ReviewRow) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Вопрос {}", row.number)).strong());
            let (tag, color) = match row.user_answer {
                Some(a) if a.is_correct => ("✓ Правильно", CORRECT_GREEN),
                Some(_) => ("✗ Неправильно", WRONG_RED),
                None => ("Не отвечено", ui.visuals().weak_text_color()),
            };
            ui.label(RichText::new(tag).color(color));
        });
        ui.label(&question.text);
        ui.add_space(4.0);

        ui.columns(2, |cols| {
            column_preview(&mut cols[0], &question.left_column.title, question, true);
            column_preview(&mut cols[1], &question.right_column.title, question, false);
        });
        ui.add_space(6.0);

        match row.user_answer {
            Some(user) => comparison(ui, question, &user),
            None => {
                ui.label("— Не отвечено");
                key_table(ui, question);
            }
        }
    });
}

fn column_preview(ui: &mut Ui, title: &str, question: &Question, left: bool) {
    let items = if left {
        &question.left_column.items
    } else {
        &question.right_column.items
    };
    ui.label(RichText::new(title).strong());
    for item in items {
        ui.label(&item.label);
    }
}

/// User tuple beside the key, element-wise marking of the slots that
/// differ when the answer is wrong.
fn comparison(ui: &mut Ui, question: &Question, user: &UserAnswer) {
    let flagged = user.mismatched_slots(&question.correct_answer);
    ui.label(RichText::new("Ваш ответ:").strong());
    Grid::new(("user_answer", question.id.as_str()))
        .min_col_width(32.0)
        .show(ui, |ui| {
            for label in question.arity().labels() {
                ui.label(RichText::new(*label).strong());
            }
            ui.end_row();
            for (value, flagged) in user.answer.iter().zip(flagged) {
                let text = if value == 0 {
                    "—".to_owned()
                } else {
                    value.to_string()
                };
                if flagged {
                    ui.label(RichText::new(text).color(WRONG_RED).strong());
                } else {
                    ui.label(text);
                }
            }
            ui.end_row();
        });

    if !user.is_correct {
        key_table(ui, question);
    }
}

fn key_table(ui: &mut Ui, question: &Question) {
    ui.add_space(4.0);
    ui.label(RichText::new("Правильный ответ:").color(CORRECT_GREEN).strong());
    Grid::new(("correct_answer", question.id.as_str()))
        .min_col_width(32.0)
        .show(ui, |ui| {
            for label in question.arity().labels() {
                ui.label(RichText::new(*label).strong());
            }
            ui.end_row();
            for value in question.correct_answer.iter() {
                ui.label(RichText::new(value.to_string()).color(CORRECT_GREEN));
            }
            ui.end_row();
        });
}
