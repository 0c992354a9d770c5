use crate::data::{image_base_path, resolve_image_url};
use crate::model::{AnswerSlots, Question};
use egui::load::TexturePoll;
use egui::{Grid, RichText, Ui};

/// Pure render of one question plus the caller's working answer. Retains
/// no state; a slot edit is reported upward as a whole new tuple with only
/// that slot replaced.
pub fn ui_question(
    ui: &mut Ui,
    question: &Question,
    number: usize,
    answer: AnswerSlots,
) -> Option<AnswerSlots> {
    let mut edited: Option<AnswerSlots> = None;

    ui.heading(format!("Вопрос {number}"));
    ui.add_space(6.0);
    ui.label(&question.text);
    ui.add_space(8.0);

    if let Some(url) = &question.image_url {
        question_image(ui, url);
    }

    // The two read-only label columns.
    ui.columns(2, |cols| {
        column(&mut cols[0], &question.left_column.title, |ui| {
            for item in &question.left_column.items {
                ui.label(&item.label);
            }
        });
        column(&mut cols[1], &question.right_column.title, |ui| {
            for item in &question.right_column.items {
                ui.label(&item.label);
            }
        });
    });

    ui.add_space(10.0);

    // One select control per expected answer slot.
    for (slot, label) in question.arity().labels().iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("{label}:"));
            let mut selected = answer.get(slot);
            egui::ComboBox::from_id_salt((question.id.as_str(), slot))
                .selected_text(if selected == 0 {
                    "Выберите ответ".to_owned()
                } else {
                    selected.to_string()
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, 0, "Выберите ответ");
                    for item in &question.right_column.items {
                        ui.selectable_value(&mut selected, item.value, item.value.to_string());
                    }
                });
            if selected != answer.get(slot) {
                edited = Some(answer.with_slot(slot, selected));
            }
        });
    }

    ui.add_space(10.0);

    // Live preview of the working tuple; em-dash for unset slots.
    ui.label(RichText::new("Ваш ответ:").strong());
    Grid::new(("answer_preview", question.id.as_str()))
        .striped(true)
        .min_col_width(32.0)
        .show(ui, |ui| {
            for label in question.arity().labels() {
                ui.label(RichText::new(*label).strong());
            }
            ui.end_row();
            for value in answer.iter() {
                ui.label(if value == 0 {
                    "—".to_owned()
                } else {
                    value.to_string()
                });
            }
            ui.end_row();
        });

    edited
}

fn column(ui: &mut Ui, title: &str, items: impl FnOnce(&mut Ui)) {
    ui.vertical(|ui| {
        ui.label(RichText::new(title).strong());
        ui.add_space(4.0);
        items(ui);
    });
}

/// Illustration with the degrade-gracefully contract: while the texture is
/// loading nothing is drawn, and a failed load hides the container instead
/// of surfacing a broken-image placeholder.
fn question_image(ui: &mut Ui, url: &str) {
    let resolved = resolve_image_url(image_base_path(), url);
    let image = egui::Image::from_uri(resolved.clone()).max_width(ui.available_width());
    match image.load_for_size(ui.ctx(), ui.available_size()) {
        Ok(TexturePoll::Ready { .. }) => {
            ui.add(image);
            ui.add_space(8.0);
        }
        Ok(TexturePoll::Pending { .. }) => {}
        Err(err) => {
            log::warn!("question image {resolved} failed to load: {err}");
        }
    }
}
