pub mod layout;
pub mod views;

use crate::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // 1 Hz tick while answering, driven from egui's monotonic clock.
        let now = ctx.input(|i| i.time);
        self.drive_timer(now);
        if !self.session.show_results {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        if self.session.show_results {
            views::results::ui_results(self, ctx);
        } else {
            views::quiz::ui_quiz(self, ctx);
        }
    }
}
