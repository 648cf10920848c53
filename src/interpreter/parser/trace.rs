use std::io::{self, Write};

/// Writes an indented `BEGIN` / `END` line around each traced parsing
/// routine, so the shape of the recursive descent can be followed.
///
/// The outermost routine is not indented; every nested call adds one tab.
/// Disabled tracers write nothing.
///
/// # Example
/// ```
/// use monkey::interpreter::parser::trace::Tracer;
///
/// let mut tracer = Tracer::with_writer(Vec::new());
/// tracer.begin("outer");
/// tracer.begin("inner");
/// tracer.end("inner");
/// tracer.end("outer");
/// ```
pub struct Tracer {
    enabled: bool,
    level:   usize,
    out:     Box<dyn Write>,
}

impl Tracer {
    /// Creates a tracer writing to stderr.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled,
               level: 0,
               out: Box::new(io::stderr()) }
    }

    /// Creates an enabled tracer writing to `out`.
    #[must_use]
    pub fn with_writer(out: impl Write + 'static) -> Self {
        Self { enabled: true,
               level:   0,
               out:     Box::new(out), }
    }

    /// Enters a routine: one level deeper, then prints `BEGIN name`.
    pub fn begin(&mut self, name: &str) {
        if self.enabled {
            self.level += 1;
            self.print("BEGIN", name);
        }
    }

    /// Leaves a routine: prints `END name`, then one level shallower.
    pub fn end(&mut self, name: &str) {
        if self.enabled {
            self.print("END", name);
            self.level = self.level.saturating_sub(1);
        }
    }

    // Trace output is best effort and never interrupts parsing.
    fn print(&mut self, marker: &str, name: &str) {
        let indent = "\t".repeat(self.level.saturating_sub(1));
        let _ = writeln!(self.out, "{indent}{marker} {name}");
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
         .field("enabled", &self.enabled)
         .field("level", &self.level)
         .finish_non_exhaustive()
    }
}
