use super::{TemplateValues, Ui, render};
use crate::error::TranslatedError;
use colored::Colorize;
use std::cell::RefCell;
use std::io::{self, Write};

/// Terminal sink: text to stdout, warnings and errors to stderr.
pub struct TerminalUi {
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
    deferred: RefCell<Vec<String>>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_writers(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
            deferred: RefCell::new(Vec::new()),
        }
    }

    // A broken terminal is not worth failing the command over.
    fn write_out(&self, line: &str) {
        let _ = writeln!(self.out.borrow_mut(), "{}", line);
    }

    fn write_err(&self, line: &str) {
        let _ = writeln!(self.err.borrow_mut(), "{}", line);
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for TerminalUi {
    fn display_error(&self, err: &TranslatedError) {
        self.write_err(&render(err.template(), err.values()));
        self.write_out(&"FAILED".red().bold().to_string());
    }

    fn display_warning(&self, template: &str, values: TemplateValues<'_>) {
        self.write_err(&render(template, values));
    }

    fn display_text(&self, template: &str, values: TemplateValues<'_>) {
        self.write_out(&render(template, values));
    }

    fn display_newline(&self) {
        self.write_out("");
    }

    fn defer_text(&self, template: &str, values: TemplateValues<'_>) {
        self.deferred.borrow_mut().push(render(template, values));
    }

    fn flush_deferred(&self) {
        let pending: Vec<String> = self.deferred.borrow_mut().drain(..).collect();
        for line in pending {
            self.write_out(&line);
        }
        let _ = self.out.borrow_mut().flush();
    }
}
