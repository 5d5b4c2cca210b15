// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::Case;

// local imports
use crate::{
    error::*,
    input::{Input, InputReference},
};

// ---

/// What to write for selected lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write each selected line.
    #[default]
    Lines,
    /// Write only the total number of selected lines.
    Count,
    /// Write nothing and stop at the first selected line.
    Quiet,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub pattern: String,
    pub case: Case,
    pub invert: bool,
    pub strip_cr: bool,
    pub skip_empty: bool,
    pub mode: OutputMode,
}

impl Options {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case: Case::Sensitive,
            invert: false,
            strip_cr: true,
            skip_empty: false,
            mode: OutputMode::Lines,
        }
    }
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Filters all inputs in order and returns the number of selected lines.
    pub fn run<W: Write>(&self, inputs: impl IntoIterator<Item = InputReference>, output: &mut W) -> Result<usize> {
        let mut selected = 0;

        for reference in inputs {
            selected += self.process(reference.open()?, output)?;
            if self.options.mode == OutputMode::Quiet && selected != 0 {
                break;
            }
        }

        if self.options.mode == OutputMode::Count {
            writeln!(output, "{}", selected)?;
        }
        output.flush()?;

        log::debug!("selected {} line(s) with pattern {:?}", selected, self.options.pattern);

        Ok(selected)
    }

    /// Filters a single opened input and returns the number of selected lines.
    ///
    /// Lines are decoded lossily before matching, so each invalid UTF-8 sequence is seen
    /// by the pattern as `U+FFFD`. Selected lines are written with their original bytes.
    pub fn process<W: Write>(&self, mut input: Input, output: &mut W) -> Result<usize> {
        let mut buf = Vec::new();
        let mut selected = 0;

        loop {
            buf.clear();
            let n = input.stream.read_until(b'\n', &mut buf).map_err(|source| Error::Input {
                name: input.reference.description(),
                source,
            })?;
            if n == 0 {
                break;
            }

            let mut line = strip_last(&buf, |ch| ch == b'\n');
            if self.options.strip_cr {
                line = strip_last(line, |ch| ch == b'\r');
            }

            if !self.selects(line) {
                continue;
            }
            selected += 1;

            match self.options.mode {
                OutputMode::Lines => {
                    output.write_all(&buf)?;
                    if buf.last() != Some(&b'\n') {
                        output.write_all(b"\n")?;
                    }
                }
                OutputMode::Count => {}
                OutputMode::Quiet => break,
            }
        }

        Ok(selected)
    }

    /// Tests the pattern against explicit candidates instead of input lines.
    pub fn check_any<I>(&self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.options.case.matches_any(&self.options.pattern, candidates) != self.options.invert
    }

    fn selects(&self, line: &[u8]) -> bool {
        if self.options.skip_empty && line.is_empty() {
            return false;
        }

        let text = String::from_utf8_lossy(line);
        self.options.case.matches(&self.options.pattern, &text) != self.options.invert
    }
}

fn strip_last<F: Fn(u8) -> bool>(slice: &[u8], predicate: F) -> &[u8] {
    match slice.last() {
        Some(&ch) if predicate(ch) => &slice[..slice.len() - 1],
        _ => slice,
    }
}
