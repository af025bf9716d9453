//! The invocation context: application metadata, raw input, styled output.
//!
//! [`Input`] and [`Output`] are the two opaque handles every handler
//! receives. The core never interprets option arguments and never reads
//! back what it wrote - input is a thin argv wrapper, output is write-only.

use std::fmt;
use std::io::{self, Write};

use crier_render::{show, Theme};

/// Metadata describing the embedding application.
///
/// Attached to every constructed handler and controller before `run`.
#[derive(Debug, Clone)]
pub struct AppMeta {
    /// Human-readable application name, shown in listings.
    pub name: String,
    /// Version string, shown in listings.
    pub version: String,
    /// One-line description, shown in listings when non-empty.
    pub description: String,
    /// Separator between group and action in raw invocation names.
    pub delimiter: char,
}

impl AppMeta {
    /// Metadata with the default `/` delimiter and no description.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: String::new(),
            delimiter: '/',
        }
    }

    /// Sets the one-line description.
    pub fn described(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    /// Overrides the group/action delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for AppMeta {
    fn default() -> Self {
        Self::new("console", "0.1.0")
    }
}

/// Raw argv-like invocation data.
///
/// The first non-option token after the script name is the command word;
/// everything else is kept verbatim for handlers to interpret. Parsing and
/// validating individual options is out of scope here.
#[derive(Debug, Clone, Default)]
pub struct Input {
    script: String,
    command: String,
    args: Vec<String>,
}

impl Input {
    /// Builds an input from explicit parts.
    pub fn new(script: &str, command: &str, args: Vec<String>) -> Self {
        Self {
            script: script.to_string(),
            command: command.to_string(),
            args,
        }
    }

    /// Builds an input from an argv-style iterator (script name first).
    pub fn from_args<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = argv.into_iter().map(Into::into);
        let script = tokens.next().unwrap_or_default();
        let mut command = String::new();
        let mut args = Vec::new();
        for token in tokens {
            if command.is_empty() && !token.starts_with('-') {
                command = token;
            } else {
                args.push(token);
            }
        }
        Self {
            script,
            command,
            args,
        }
    }

    /// Builds an input from the process arguments.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args())
    }

    /// The script name (argv\[0\]).
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The command word: the first non-option argument, or `""`.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Every remaining argument, options included, in original order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The nth remaining argument.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Write-only styled output collaborator.
///
/// Wraps any [`io::Write`] destination together with a [`Theme`]. The block
/// and layout helpers format through `crier-render` and write the result;
/// nothing here is read back or buffered.
pub struct Output {
    writer: Box<dyn Write>,
    theme: Theme,
}

impl Output {
    /// Output to the given writer with the given theme.
    pub fn new(writer: Box<dyn Write>, theme: Theme) -> Self {
        Self { writer, theme }
    }

    /// Output to stdout with the default theme.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()), Theme::default())
    }

    /// The theme used for styled writes.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Writes text as-is.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Writes text followed by a newline.
    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Writes text through a named theme style; unknown names write plain.
    pub fn styled(&mut self, text: &str, style: &str) -> io::Result<()> {
        match self.theme.get(style) {
            Some(style) => {
                let rendered = style.apply_to(text).to_string();
                self.write(&rendered)
            }
            None => self.write(text),
        }
    }

    /// Styled text followed by a newline.
    pub fn styled_line(&mut self, text: &str, style: &str) -> io::Result<()> {
        self.styled(text, style)?;
        self.write("\n")
    }

    /// One-line error without the block framing.
    pub fn lite_error(&mut self, message: &str) -> io::Result<()> {
        self.styled_line(message, "error")
    }

    /// A `[LABEL]` message block with an optional named style.
    pub fn block(
        &mut self,
        messages: &[&str],
        label: Option<&str>,
        style: Option<&str>,
    ) -> io::Result<()> {
        let text = show::block(messages, label, style, &self.theme);
        self.writeln(&text)
    }

    /// `[IMPORTANT]` block.
    pub fn primary(&mut self, message: &str) -> io::Result<()> {
        let text = show::primary(message, &self.theme);
        self.writeln(&text)
    }

    /// `[INFO]` block.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        let text = show::info(message, &self.theme);
        self.writeln(&text)
    }

    /// `[NOTICE]` block.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        let text = show::notice(message, &self.theme);
        self.writeln(&text)
    }

    /// `[SUCCESS]` block.
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let text = show::success(message, &self.theme);
        self.writeln(&text)
    }

    /// `[WARNING]` block.
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let text = show::warning(message, &self.theme);
        self.writeln(&text)
    }

    /// `[DANGER]` block.
    pub fn danger(&mut self, message: &str) -> io::Result<()> {
        let text = show::danger(message, &self.theme);
        self.writeln(&text)
    }

    /// `[ERROR]` block.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let text = show::error(message, &self.theme);
        self.writeln(&text)
    }

    /// Centered, underlined title sized to the terminal (80 columns max).
    pub fn title(&mut self, text: &str) -> io::Result<()> {
        let width = crier_render::term_width().min(show::DEFAULT_WIDTH);
        let rendered = show::title(text, width);
        self.write(&rendered)
    }

    /// Titled section with an indented body.
    pub fn section(&mut self, heading: &str, body: &str) -> io::Result<()> {
        let rendered = show::section(heading, body, show::DEFAULT_WIDTH);
        self.write(&rendered)
    }

    /// Aligned key/value list.
    pub fn a_list<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        pairs: &[(K, V)],
        heading: Option<&str>,
    ) -> io::Result<()> {
        let rendered = show::a_list(pairs, heading);
        self.write(&rendered)
    }

    /// Several titled aligned lists.
    pub fn multi_list<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        sections: &[(&str, Vec<(K, V)>)],
    ) -> io::Result<()> {
        let rendered = show::multi_list(sections);
        self.write(&rendered)
    }

    /// Bordered key/value panel.
    pub fn panel<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        pairs: &[(K, V)],
        heading: &str,
        border: char,
    ) -> io::Result<()> {
        let rendered = show::panel(pairs, heading, border);
        self.write(&rendered)
    }

    /// Bordered table with emphasized headers.
    pub fn table(
        &mut self,
        headers: &[&str],
        rows: &[Vec<String>],
        heading: Option<&str>,
    ) -> io::Result<()> {
        let rendered = show::table(headers, rows, heading);
        self.write(&rendered)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A writer whose contents stay readable after the `Output` takes it.
    #[derive(Clone, Default)]
    pub struct Buffer(Rc<RefCell<Vec<u8>>>);

    impl Buffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// An `Output` writing into a readable buffer, default theme.
    pub fn capture_output() -> (Output, Buffer) {
        let buffer = Buffer::default();
        let output = Output::new(Box::new(buffer.clone()), Theme::default());
        (output, buffer)
    }
}
