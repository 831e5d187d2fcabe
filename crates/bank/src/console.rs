//! Line-oriented output sinks.

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for human-readable output lines.
pub trait Console {
    fn print_line(&mut self, line: &str);
}

impl<C> Console for &mut C
where
    C: Console + ?Sized,
{
    fn print_line(&mut self, line: &str) {
        (**self).print_line(line)
    }
}

/// Process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// In-memory console for tests/dev.
///
/// Clones share one buffer, so a bank and its notifiers can record into the
/// same transcript and keep their relative order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == line)
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl Console for Transcript {
    fn print_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
