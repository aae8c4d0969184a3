//! Number checker desktop UI.
//!
//! # Design Notes
//! - Single-column form: input field, one radio button per category, a
//!   "Check" button and a result label.
//! - Enter in the input field checks the number like the button does.
//! - All state lives in [`FormState`]; this module only draws it.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, Key, RichText, TextEdit, Ui},
};
use numclass_core::Category;

use crate::form::FormState;

/// Window title of the desktop form.
pub const TITLE: &str = "Number Checker";

const SPACING: f32 = 10.0;
const RESULT_TEXT_SIZE: f32 = 16.0;

/// The number checker window.
#[derive(Debug, Default)]
pub struct NumclassApp {
    form: FormState,
}

impl NumclassApp {
    /// Creates the app with an empty form and the Prime category selected.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::default()
    }

    fn draw_input(&mut self, ui: &mut Ui) -> bool {
        ui.label("Enter a number:");
        let response = ui.add(TextEdit::singleline(&mut self.form.input).hint_text("e.g. 153"));
        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
    }

    fn draw_categories(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            for category in Category::ALL {
                ui.radio_value(&mut self.form.category, category, category.name());
            }
        });
    }

    fn draw_result(&self, ui: &mut Ui) {
        ui.label(RichText::new(self.form.result_text()).size(RESULT_TEXT_SIZE));
    }
}

impl App for NumclassApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(SPACING);
                let submitted = self.draw_input(ui);
                ui.add_space(SPACING);
                self.draw_categories(ui);
                ui.add_space(SPACING);
                if ui.button("Check").clicked() || submitted {
                    self.form.check();
                }
                ui.add_space(SPACING);
                self.draw_result(ui);
            });
        });
    }
}
