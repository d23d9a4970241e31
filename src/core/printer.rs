//! Line formatting
//!
//! Splits decoded chunks into lines and writes them out with the
//! optional line-number prefix and `" $"` end marker. The partial line
//! at the tail of a chunk is carried into the next call, so chunk
//! boundaries never show up in the output. The line counter lives here
//! and keeps counting across files.

use std::io::{self, Write};

pub struct LinePrinter {
    number: bool,
    show_ends: bool,
    next_line: u64,
    partial: String,
}

impl LinePrinter {
    pub fn new(number: bool, show_ends: bool) -> Self {
        Self {
            number,
            show_ends,
            next_line: 1,
            partial: String::new(),
        }
    }

    /// Format and write every complete line in `chunk`, carrying the
    /// trailing partial line for the next call.
    pub fn write_chunk<W: Write>(&mut self, chunk: &str, out: &mut W) -> io::Result<()> {
        let mut rest = chunk;
        while let Some(pos) = rest.find('\n') {
            self.partial.push_str(&rest[..pos]);
            self.emit_line(out)?;
            rest = &rest[pos + 1..];
        }
        self.partial.push_str(rest);
        Ok(())
    }

    /// Flush a final line that did not end in a newline. Call once per
    /// file; a file ending in a newline produces no extra blank line.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.partial.is_empty() {
            self.emit_line(out)?;
        }
        Ok(())
    }

    fn emit_line<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.number {
            write!(out, "{} ", self.next_line)?;
            self.next_line += 1;
        }
        out.write_all(self.partial.as_bytes())?;
        if self.show_ends {
            out.write_all(b" $")?;
        }
        out.write_all(b"\n")?;
        self.partial.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_all(printer: &mut LinePrinter, chunks: &[&str]) -> String {
        let mut out = Vec::new();
        for chunk in chunks {
            printer.write_chunk(chunk, &mut out).unwrap();
        }
        printer.finish(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_passthrough() {
        let mut printer = LinePrinter::new(false, false);
        assert_eq!(print_all(&mut printer, &["hello\nworld\n"]), "hello\nworld\n");
    }

    #[test]
    fn test_no_blank_line_after_trailing_newline() {
        let mut printer = LinePrinter::new(true, false);
        assert_eq!(print_all(&mut printer, &["a\n"]), "1 a\n");
    }

    #[test]
    fn test_unterminated_final_line_is_flushed() {
        let mut printer = LinePrinter::new(false, false);
        assert_eq!(print_all(&mut printer, &["a\nb"]), "a\nb\n");
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut printer = LinePrinter::new(false, false);
        assert_eq!(
            print_all(&mut printer, &["hel", "lo\nwo", "rld\n"]),
            "hello\nworld\n"
        );
    }

    #[test]
    fn test_numbering_starts_at_one() {
        let mut printer = LinePrinter::new(true, false);
        assert_eq!(print_all(&mut printer, &["a\nb\nc\n"]), "1 a\n2 b\n3 c\n");
    }

    #[test]
    fn test_numbering_persists_across_files() {
        let mut printer = LinePrinter::new(true, false);
        let mut out = Vec::new();
        printer.write_chunk("a\nb\n", &mut out).unwrap();
        printer.finish(&mut out).unwrap();
        printer.write_chunk("c\n", &mut out).unwrap();
        printer.finish(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 a\n2 b\n3 c\n");
    }

    #[test]
    fn test_show_ends() {
        let mut printer = LinePrinter::new(false, true);
        assert_eq!(print_all(&mut printer, &["x\ny"]), "x $\ny $\n");
    }

    #[test]
    fn test_number_and_show_ends_together() {
        let mut printer = LinePrinter::new(true, true);
        assert_eq!(print_all(&mut printer, &["x\n\n"]), "1 x $\n2  $\n");
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let mut printer = LinePrinter::new(true, true);
        assert_eq!(print_all(&mut printer, &[]), "");
    }
}
