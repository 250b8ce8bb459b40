//! Output trait for rendering reports to different formats.

/// Where reports are rendered.
///
/// Reports call these methods to describe their content; the implementation
/// chooses the presentation.
pub trait Output {
    /// Heading for the lines that follow.
    fn section(&mut self, name: &str);

    /// `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// Neutral list entry.
    fn list_item(&mut self, text: &str);

    /// Entry for something created on disk.
    fn added_item(&mut self, text: &str);

    /// Message that did not stop the run.
    fn notice(&mut self, msg: &str);

    /// Labelled separator between preview blocks.
    fn divider(&mut self, label: &str);

    /// Text printed as-is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Result of a command that knows how to present itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints reports to standard output.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn notice(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn notice(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
