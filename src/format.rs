//! Terminal rendering of the assistant's answer.
//!
//! Fenced bash blocks are recognised by plain substring substitution, not by
//! parsing Markdown. The opening fence ```` ```bash\n ```` becomes the code
//! color escape and the closing ```` \n``` ```` becomes a reset. Each line is
//! then colored by prefix unless it contains the code color escape itself.
//!
//! That check is per line. Interior lines of a multi-line block do not carry
//! the escape, so they get prefix coloring like any other line. Only the
//! first line of a block is left alone.

use console::Style;

/// 256-color palette index used for fenced bash code.
pub const CODE_COLOR_INDEX: u8 = 105;

const BASH_FENCE_OPEN: &str = "```bash\n";
const FENCE_CLOSE: &str = "\n```";

/// Semantic color of a span of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Lines starting with "Error".
    Error,
    /// Lines starting with "Warning".
    Warning,
    /// Any other line outside a code block.
    Text,
    /// Fenced bash code.
    Code,
}

impl ColorTag {
    fn for_line(line: &str) -> Self {
        if line.starts_with("Error") {
            ColorTag::Error
        } else if line.starts_with("Warning") {
            ColorTag::Warning
        } else {
            ColorTag::Text
        }
    }
}

/// Emits the markers that open and close a colored span.
pub trait Painter {
    fn begin(&self, tag: ColorTag) -> String;

    fn reset(&self) -> String;

    fn paint(&self, text: &str, tag: ColorTag) -> String {
        format!("{}{}{}", self.begin(tag), text, self.reset())
    }
}

/// Splits a rendered span into the markers around it.
const SPAN_SPLIT: &str = "\u{1f}";

/// ANSI styling through `console`, forced on regardless of the output target.
#[derive(Debug, Clone)]
pub struct AnsiPainter {
    error: Style,
    warning: Style,
    text: Style,
    code: Style,
}

impl AnsiPainter {
    pub fn new() -> Self {
        Self {
            error: Style::new().red().force_styling(true),
            warning: Style::new().yellow().force_styling(true),
            text: Style::new().green().force_styling(true),
            code: Style::new().color256(CODE_COLOR_INDEX).force_styling(true),
        }
    }

    fn style(&self, tag: ColorTag) -> &Style {
        match tag {
            ColorTag::Error => &self.error,
            ColorTag::Warning => &self.warning,
            ColorTag::Text => &self.text,
            ColorTag::Code => &self.code,
        }
    }

    /// Escape sequences `console` writes before and after a span.
    fn markers(style: &Style) -> (String, String) {
        let rendered = style.apply_to(SPAN_SPLIT).to_string();
        match rendered.split_once(SPAN_SPLIT) {
            Some((open, close)) => (open.to_string(), close.to_string()),
            None => (String::new(), String::new()),
        }
    }
}

impl Default for AnsiPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for AnsiPainter {
    fn begin(&self, tag: ColorTag) -> String {
        Self::markers(self.style(tag)).0
    }

    fn reset(&self) -> String {
        Self::markers(&self.text).1
    }

    fn paint(&self, text: &str, tag: ColorTag) -> String {
        self.style(tag).apply_to(text).to_string()
    }
}

/// No markers at all, for `NO_COLOR` terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn begin(&self, _tag: ColorTag) -> String {
        String::new()
    }

    fn reset(&self) -> String {
        String::new()
    }
}

/// Formats answer text with a given [`Painter`]. Total over its input.
pub struct Formatter<P> {
    painter: P,
}

impl<P: Painter> Formatter<P> {
    pub fn new(painter: P) -> Self {
        Self { painter }
    }

    pub fn format(&self, content: &str) -> String {
        let code_start = self.painter.begin(ColorTag::Code);
        let substituted = content
            .replace(BASH_FENCE_OPEN, &code_start)
            .replace(FENCE_CLOSE, &self.painter.reset());

        substituted
            .split('\n')
            .map(|line| {
                // An empty marker would match every line.
                if !code_start.is_empty() && line.contains(code_start.as_str()) {
                    line.to_string()
                } else {
                    self.painter.paint(line, ColorTag::for_line(line))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format with ANSI colors.
pub fn format_response(content: &str) -> String {
    Formatter::new(AnsiPainter::new()).format(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: &str = "\x1b[31m";
    const YELLOW: &str = "\x1b[33m";
    const GREEN: &str = "\x1b[32m";
    const CODE: &str = "\x1b[38;5;105m";
    const RESET: &str = "\x1b[0m";

    /// Bracketed tags so assertions read without escape codes.
    struct TagPainter;

    impl Painter for TagPainter {
        fn begin(&self, tag: ColorTag) -> String {
            format!("<{tag:?}>")
        }

        fn reset(&self) -> String {
            "</>".to_string()
        }
    }

    #[test]
    fn plain_line_is_green() {
        assert_eq!(format_response("hi there"), format!("{GREEN}hi there{RESET}"));
    }

    #[test]
    fn prefixes_pick_colors() {
        assert_eq!(
            format_response("Error: disk full"),
            format!("{RED}Error: disk full{RESET}")
        );
        assert_eq!(
            format_response("Warning: low memory"),
            format!("{YELLOW}Warning: low memory{RESET}")
        );
        assert_eq!(
            format_response("  Error: indented"),
            format!("{GREEN}  Error: indented{RESET}")
        );
    }

    #[test]
    fn every_line_is_colored_independently() {
        let out = Formatter::new(TagPainter).format("intro\nError: x\nWarning: y\n");
        assert_eq!(out, "<Text>intro</>\n<Error>Error: x</>\n<Warning>Warning: y</>\n<Text></>");
    }

    #[test]
    fn single_line_bash_block_keeps_only_fence_escapes() {
        let out = format_response("Run:\n```bash\nls -la\n```\nDone");
        assert_eq!(
            out,
            format!("{GREEN}Run:{RESET}\n{CODE}ls -la{RESET}\n{GREEN}Done{RESET}")
        );
    }

    // Interior lines of a block do not contain the code escape, so they are
    // colored like ordinary text. Fence state is not carried across lines.
    #[test]
    fn multi_line_bash_block_interior_is_prefix_colored() {
        let out = Formatter::new(TagPainter).format("```bash\ncd /tmp\nError here\nls\n```");
        assert_eq!(
            out,
            "<Code>cd /tmp\n<Error>Error here</>\n<Text>ls</></>"
        );
    }

    #[test]
    fn other_fence_languages_are_untouched() {
        let out = Formatter::new(TagPainter).format("```python\nprint(1)\n```");
        // Only the generic closing fence is substituted.
        assert_eq!(out, "<Text>```python</>\n<Text>print(1)</></>");
    }

    #[test]
    fn plain_painter_strips_fences() {
        let out = Formatter::new(PlainPainter).format("Run:\n```bash\nls\n```\nError: x");
        assert_eq!(out, "Run:\nls\nError: x");
    }

    #[test]
    fn ansi_markers_come_from_console_styles() {
        let painter = AnsiPainter::new();
        assert_eq!(painter.begin(ColorTag::Code), CODE);
        assert_eq!(painter.begin(ColorTag::Error), RED);
        assert_eq!(painter.reset(), RESET);

        let styled = Style::new()
            .color256(CODE_COLOR_INDEX)
            .force_styling(true)
            .apply_to("ls")
            .to_string();
        assert_eq!(
            styled,
            format!("{}ls{}", painter.begin(ColorTag::Code), painter.reset())
        );
        assert_eq!(painter.paint("ls", ColorTag::Code), styled);
    }

    #[test]
    fn empty_input() {
        assert_eq!(format_response(""), format!("{GREEN}{RESET}"));
    }
}
