//! In-memory [`Ui`] used by unit tests.

use super::{TemplateValues, Ui, render};
use crate::error::TranslatedError;
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub(crate) struct RecordingUi {
    pub out: RefCell<Vec<String>>,
    pub err: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<TranslatedError>>,
    pub deferred: RefCell<Vec<String>>,
    pub flushes: Cell<usize>,
}

impl RecordingUi {
    pub fn out_text(&self) -> String {
        self.out.borrow().join("\n")
    }

    pub fn err_text(&self) -> String {
        self.err.borrow().join("\n")
    }

    pub fn out_contains(&self, needle: &str) -> bool {
        self.out.borrow().iter().any(|line| line.contains(needle))
    }

    pub fn err_contains(&self, needle: &str) -> bool {
        self.err.borrow().iter().any(|line| line.contains(needle))
    }

    pub fn count_out(&self, needle: &str) -> usize {
        self.out
            .borrow()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Ui for RecordingUi {
    fn display_error(&self, err: &TranslatedError) {
        self.err
            .borrow_mut()
            .push(render(err.template(), err.values()));
        self.errors.borrow_mut().push(err.clone());
    }

    fn display_warning(&self, template: &str, values: TemplateValues<'_>) {
        self.err.borrow_mut().push(render(template, values));
    }

    fn display_text(&self, template: &str, values: TemplateValues<'_>) {
        self.out.borrow_mut().push(render(template, values));
    }

    fn display_newline(&self) {
        self.out.borrow_mut().push(String::new());
    }

    fn defer_text(&self, template: &str, values: TemplateValues<'_>) {
        self.deferred.borrow_mut().push(render(template, values));
    }

    fn flush_deferred(&self) {
        let pending: Vec<String> = self.deferred.borrow_mut().drain(..).collect();
        self.out.borrow_mut().extend(pending);
        self.flushes.set(self.flushes.get() + 1);
    }
}
