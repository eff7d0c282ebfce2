use std::fmt::Display;
use std::io::{self, Write};
use std::time::Instant;

/// Wraps calls to numeric functions, timing each one and writing a report
/// line to the sink after it returns:
///
/// ```text
/// fibonacci(10) -> 55 in 1.234e-2ms
/// ```
///
/// The reporter is a pure observer: the wrapped value is returned unchanged,
/// and a failing call propagates its error before any line is written.
///
/// # Example
/// ```
/// use recurseq::report::Reporter;
///
/// let mut reporter = Reporter::new(Vec::new());
/// let answer = reporter.observe("double", &[&21], || 21 * 2);
/// assert_eq!(answer, 42);
/// let line = String::from_utf8(reporter.into_inner()).unwrap();
/// assert!(line.starts_with("double(21) -> 42 in "));
/// ```
pub struct Reporter<W> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the sink and whatever it captured.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Times `call`, writes one report line, and returns the value unchanged.
    ///
    /// Elapsed time is measured on the nanosecond-resolution monotonic clock
    /// and reported in milliseconds with three fractional digits of
    /// scientific notation. A panic inside `call` unwinds before any line is
    /// written.
    pub fn observe<R, F>(&mut self, name: &str, args: &[&dyn Display], call: F) -> R
    where
        F: FnOnce() -> R,
        R: Display,
    {
        let start = Instant::now();
        let ret = call();
        self.emit(name, args, &ret, start);
        ret
    }

    /// Like [`Reporter::observe`] for fallible calls. An `Err` propagates
    /// unchanged and no report line is emitted for it.
    pub fn try_observe<R, E, F>(
        &mut self,
        name: &str,
        args: &[&dyn Display],
        call: F,
    ) -> Result<R, E>
    where
        F: FnOnce() -> Result<R, E>,
        R: Display,
    {
        let start = Instant::now();
        let ret = call()?;
        self.emit(name, args, &ret, start);
        Ok(ret)
    }

    fn emit<R: Display>(&mut self, name: &str, args: &[&dyn Display], ret: &R, start: Instant) {
        let elapsed_ms = start.elapsed().as_nanos() as f64 / 1e6;
        let args = format_args_list(args);
        // Reporting is best-effort: a sink error must not disturb the result.
        let _ = writeln!(self.out, "{name}({args}) -> {ret} in {elapsed_ms:.3e}ms");
    }
}

/// Renders an argument list the way it appears in the report line:
/// each argument's `Display` form, comma-separated.
fn format_args_list(args: &[&dyn Display]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).expect("report lines are utf-8")
    }

    #[test]
    fn reports_name_args_and_result() {
        let mut reporter = Reporter::new(Vec::new());
        let ret = reporter.observe("f", &[&3], || 42);
        assert_eq!(ret, 42);

        let line = captured(reporter);
        assert!(line.starts_with("f(3) -> 42 in "), "got: {line}");
        assert!(line.ends_with("ms\n"), "got: {line}");
    }

    #[test]
    fn formats_multiple_args() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.observe("g", &[&1, &"two", &3.5], || 0);
        assert!(captured(reporter).starts_with("g(1, two, 3.5) -> 0 in "));
    }

    #[test]
    fn elapsed_is_scientific_milliseconds() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.observe("h", &[], || 1);

        let line = captured(reporter);
        let elapsed = line
            .rsplit(" in ")
            .next()
            .and_then(|s| s.strip_suffix("ms\n"))
            .expect("line has an elapsed field");
        assert!(elapsed.contains('e'), "not scientific: {elapsed}");
        assert!(elapsed.parse::<f64>().expect("numeric elapsed") >= 0.0);
    }

    #[test]
    fn failure_propagates_without_a_line() {
        let mut reporter = Reporter::new(Vec::new());
        let ret: Result<u32, &str> = reporter.try_observe("f", &[&3], || Err("boom"));
        assert_eq!(ret, Err("boom"));
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn success_through_try_observe_reports() {
        let mut reporter = Reporter::new(Vec::new());
        let ret: Result<u32, &str> = reporter.try_observe("f", &[&3], || Ok(42));
        assert_eq!(ret, Ok(42));
        assert!(captured(reporter).starts_with("f(3) -> 42 in "));
    }

    #[test]
    fn returns_value_unchanged() {
        let mut reporter = Reporter::new(Vec::new());
        let values: Vec<u64> = (0..5).map(|n| reporter.observe("id", &[&n], || n)).collect();
        assert_eq!(values, [0, 1, 2, 3, 4]);
        assert_eq!(captured(reporter).lines().count(), 5);
    }
}
