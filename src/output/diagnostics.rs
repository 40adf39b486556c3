use colored::*;
use std::io::{self, Write};

/// Severity of a stderr diagnostic, used only to pick a colour
#[derive(Debug, Clone, Copy)]
pub enum Severity {
    Error,
    Notice,
}

/// Colour diagnostics only when stderr is a terminal and `--no-color` is off
pub fn should_color(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

/// Writes human-readable diagnostics to the error stream
pub struct Diagnostics<'a, W: Write> {
    writer: &'a mut W,
    colored: bool,
}

impl<'a, W: Write> Diagnostics<'a, W> {
    pub fn new(writer: &'a mut W, colored: bool) -> Self {
        Self { writer, colored }
    }

    /// Headline message, coloured by severity when enabled
    pub fn headline(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        if self.colored {
            let painted = match severity {
                Severity::Error => message.red(),
                Severity::Notice => message.yellow(),
            };
            writeln!(self.writer, "{}", painted)
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Supporting detail printed as-is
    pub fn detail(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_color() {
        assert!(should_color(false, true));
        assert!(!should_color(true, true));
        assert!(!should_color(false, false));
        assert!(!should_color(true, false));
    }

    #[test]
    fn test_colored_headline() {
        colored::control::set_override(true);
        let mut buf = Vec::new();
        {
            let mut diag = Diagnostics::new(&mut buf, true);
            diag.headline(Severity::Error, "Failed to query Loki: boom").unwrap();
            diag.detail("URL: http://localhost:3100").unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\x1b["));
        assert!(text.contains("Failed to query Loki: boom"));
        assert!(text.ends_with("\nURL: http://localhost:3100\n"));
    }

    #[test]
    fn test_plain_diagnostics() {
        let mut buf = Vec::new();
        {
            let mut diag = Diagnostics::new(&mut buf, false);
            diag.headline(Severity::Error, "Failed to query Loki: boom").unwrap();
            diag.detail("URL: http://localhost:3100").unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Failed to query Loki: boom\nURL: http://localhost:3100\n"
        );
    }
}
