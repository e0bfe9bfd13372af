//! Console operator
//!
//! Line-oriented implementation of the pipeline's [`Operator`] trait.
//! Each prompt blocks on one line of input; `c` cancels prompts that
//! can be cancelled, an empty line takes the default. The operator is
//! generic over its reader and writer so prompt handling is testable
//! with in-memory buffers.

use spheroid_core::GrayImage;
use spheroid_pipeline::Operator;
use spheroid_region::Roi;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::path::PathBuf;

/// Operator talking to a terminal (or any reader/writer pair).
pub struct ConsoleOperator<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleOperator<BufReader<Stdin>, Stdout> {
    /// Console operator over the process's stdin/stdout.
    pub fn stdio() -> Self {
        ConsoleOperator {
            reader: BufReader::new(std::io::stdin()),
            writer: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleOperator { reader, writer }
    }

    /// Read one trimmed line; `None` on end of input.
    fn read_line(&mut self) -> Option<String> {
        let _ = self.writer.flush();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn banner(&mut self, title: &str) {
        let _ = writeln!(self.writer, "\n=== {title} ===");
    }
}

/// Interpretation of one line typed at a choice prompt.
fn parse_choice(line: &str, option_count: usize, default: usize) -> Result<Option<usize>, ()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Some(default));
    }
    if line.eq_ignore_ascii_case("c") {
        return Ok(None);
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=option_count).contains(&n) => Ok(Some(n - 1)),
        _ => Err(()),
    }
}

/// Interpretation of one line typed at a multi-select prompt.
fn parse_selection(line: &str, item_count: usize) -> Result<Option<Vec<usize>>, ()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Some(Vec::new()));
    }
    if line.eq_ignore_ascii_case("c") {
        return Ok(None);
    }
    if line.eq_ignore_ascii_case("all") {
        return Ok(Some((0..item_count).collect()));
    }
    let mut picked = Vec::new();
    for token in line.split(',') {
        match token.trim().parse::<usize>() {
            Ok(n) if (1..=item_count).contains(&n) => picked.push(n - 1),
            _ => return Err(()),
        }
    }
    Ok(Some(picked))
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn message(&mut self, title: &str, text: &str) {
        self.banner(title);
        let _ = writeln!(self.writer, "{text}");
        let _ = write!(self.writer, "[Enter to continue] ");
        let _ = self.read_line();
    }

    fn choose(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> Option<usize> {
        self.banner(title);
        let _ = writeln!(self.writer, "{prompt}");
        for (i, option) in options.iter().enumerate() {
            let marker = if i == default { "*" } else { " " };
            let _ = writeln!(self.writer, " {marker} {}) {option}", i + 1);
        }
        loop {
            let _ = write!(self.writer, "Choice [Enter = default, c = cancel]: ");
            let line = self.read_line()?;
            if let Ok(result) = parse_choice(&line, options.len(), default) {
                return result;
            }
            let _ = writeln!(self.writer, "Please enter a number between 1 and {}.", options.len());
        }
    }

    fn slider(
        &mut self,
        title: &str,
        prompt: &str,
        min: i32,
        max: i32,
        default: i32,
    ) -> Option<i32> {
        self.banner(title);
        loop {
            let _ = write!(
                self.writer,
                "{prompt} [{min}-{max}, Enter = {default}, c = cancel]: "
            );
            let line = self.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                return Some(default);
            }
            if line.eq_ignore_ascii_case("c") {
                return None;
            }
            if let Ok(value) = line.parse::<i32>() {
                return Some(value.clamp(min, max));
            }
            let _ = writeln!(self.writer, "Please enter a number.");
        }
    }

    fn select_regions(&mut self, title: &str, prompt: &str, names: &[String]) -> Option<Vec<usize>> {
        self.banner(title);
        let _ = writeln!(self.writer, "{prompt}");
        for (i, name) in names.iter().enumerate() {
            let _ = writeln!(self.writer, "   {}) {name}", i + 1);
        }
        loop {
            let _ = write!(
                self.writer,
                "Numbers (comma-separated, 'all', Enter = none, c = cancel): "
            );
            let line = self.read_line()?;
            if let Ok(result) = parse_selection(&line, names.len()) {
                return result;
            }
            let _ = writeln!(self.writer, "Please enter numbers between 1 and {}.", names.len());
        }
    }

    fn show_regions(&mut self, title: &str, image: &GrayImage, rois: &[Roi]) {
        self.banner(title);
        let _ = writeln!(
            self.writer,
            "{} region(s) on a {}x{} image",
            rois.len(),
            image.width(),
            image.height()
        );
        for roi in rois {
            let b = roi.bounds();
            let _ = writeln!(
                self.writer,
                "   {:<24} area {:>8}  at ({}, {}) {}x{}",
                roi.name(),
                roi.area(),
                b.x,
                b.y,
                b.w,
                b.h
            );
        }
    }

    fn pick_directory(&mut self, title: &str, prompt: &str) -> Option<PathBuf> {
        self.banner(title);
        let _ = write!(self.writer, "{prompt} [empty to cancel]: ");
        let line = self.read_line()?;
        if line.is_empty() {
            return None;
        }
        Some(PathBuf::from(line))
    }
}
