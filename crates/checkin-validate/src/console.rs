use std::io::{self, BufRead, Write};

/// Prompt-and-read capability for the fill loop.
///
/// The form never touches the ambient terminal; it talks to whatever
/// console it is handed. The binary passes locked stdio, tests pass
/// in-memory buffers.
pub trait Console {
    /// Print a prompt and read one input line, trailing newline stripped.
    /// A closed input stream is an error: the fill loop must not spin on
    /// a reader that can no longer produce values.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print an informational line (rejection notices).
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Console over any reader/writer pair.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the form was complete",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_line_strips_line_endings() {
        let mut console = LineConsole::new(Cursor::new(b"Dana\r\n".to_vec()), Vec::new());
        let line = console.prompt_line("What is your name?").unwrap();
        assert_eq!(line, "Dana");
        let (_, output) = console.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "What is your name?\n");
    }

    #[test]
    fn exhausted_reader_is_an_error() {
        let mut console = LineConsole::new(Cursor::new(Vec::new()), Vec::new());
        let err = console.prompt_line("anything?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
