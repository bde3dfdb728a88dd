//! Draws the desktop to a text terminal with 24-bit ANSI colors.

use std::fmt::Write as _;

use folio_skin::{Color, Palette, Theme};
use folio_terminal::{
    CellPayload, CellState, Emphasis, Joke, LineContent, LineKind, RichBlock, ScrollbackLine,
    Terminal,
};
use folio_wm::WindowMode;

use crate::desktop::Desktop;

const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CARET: char = '█';

/// Renders whole frames. With `color` off the output is plain text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    fn paint(&self, out: &mut String, fg: Color, text: &str) {
        if self.color {
            let _ = write!(out, "\x1b[38;2;{};{};{}m{text}{RESET}", fg.r, fg.g, fg.b);
        } else {
            out.push_str(text);
        }
    }

    /// One complete screen: window (or taskbar affordance) plus any notice.
    pub fn frame(&self, desktop: &Desktop, notice: Option<&str>) -> String {
        let mut out = String::new();
        if self.color {
            out.push_str(CLEAR_SCREEN);
        }
        let theme = desktop.terminal.theme();
        match desktop.wm.mode() {
            WindowMode::Minimized => {
                let label = format!("[ {} ]", desktop.minimized_label());
                self.paint(&mut out, theme.palette.accent, &label);
                out.push('\n');
            }
            mode => {
                self.title_bar(&mut out, desktop, mode);
                self.scrollback(&mut out, &desktop.terminal);
                self.prompt(&mut out, theme, desktop.terminal.session().input(), desktop.focused);
            }
        }
        if let Some(notice) = notice {
            self.paint(&mut out, theme.palette.muted, notice);
            out.push('\n');
        }
        out
    }

    fn title_bar(&self, out: &mut String, desktop: &Desktop, mode: WindowMode) {
        let theme = desktop.terminal.theme();
        let geometry = match (mode, desktop.wm.frame()) {
            (WindowMode::Maximized, _) => "maximized".to_string(),
            (_, Some(r)) => format!(
                "{}x{} @ {},{}",
                r.size.width, r.size.height, r.origin.x, r.origin.y
            ),
            (_, None) => String::new(),
        };
        let bar = format!("── {} ── {geometry} ── [_] [□]", theme.header);
        self.paint(out, theme.palette.muted, &bar);
        out.push('\n');
    }

    fn scrollback(&self, out: &mut String, term: &Terminal) {
        for line in term.session().scrollback() {
            self.line(out, term, line);
        }
    }

    fn line(&self, out: &mut String, term: &Terminal, line: &ScrollbackLine) {
        let theme = term.theme();
        let p = &theme.palette;
        match &line.content {
            LineContent::Text(text) if line.kind == LineKind::Input => {
                self.paint(out, p.accent, &theme.prompt);
                out.push(' ');
                self.paint(out, p.text, text);
                out.push('\n');
            }
            LineContent::Text(text) => {
                self.paint(out, kind_color(p, line.kind), text);
                out.push('\n');
            }
            LineContent::Rich(block) => self.rich(out, p, block),
            LineContent::Cell => match term.cell(line.id) {
                Some(state) => self.cell(out, p, state),
                None => log::trace!("line {} has no mounted cell", line.id.get()),
            },
        }
    }

    fn rich(&self, out: &mut String, p: &Palette, block: &RichBlock) {
        self.paint(out, p.accent, &block.title);
        out.push('\n');
        for paragraph in &block.paragraphs {
            for span in paragraph {
                self.paint(out, emphasis_color(p, span.emphasis), &span.text);
            }
            out.push_str("\n\n");
        }
        if let Some(footer) = &block.footer {
            self.paint(out, p.muted, footer);
            out.push('\n');
        }
    }

    fn cell(&self, out: &mut String, p: &Palette, state: &CellState) {
        match state {
            CellState::Pending(kind) => self.paint(out, p.info, kind.loading_text()),
            CellState::Failed(text) => self.paint(out, p.error, text),
            CellState::Resolved(CellPayload::Joke(joke)) => {
                self.paint(out, p.highlight, "┌ JOKE ┐");
                out.push('\n');
                match joke {
                    Joke::Single(text) => self.paint(out, p.text, text),
                    Joke::TwoPart { setup, delivery } => {
                        self.paint(out, p.text, &format!("\"{setup}\""));
                        out.push_str("\n\n");
                        self.paint(out, p.accent, delivery);
                    }
                }
            }
            CellState::Resolved(CellPayload::Image { url }) => {
                self.paint(out, p.highlight, "┌ WAIFU ┐");
                out.push('\n');
                self.paint(out, p.info, url);
            }
        }
        out.push('\n');
    }

    fn prompt(&self, out: &mut String, theme: &Theme, input: &str, focused: bool) {
        self.paint(out, theme.palette.accent, &theme.prompt);
        out.push(' ');
        self.paint(out, theme.palette.text, input);
        if focused {
            self.paint(out, theme.palette.caret, &CARET.to_string());
        }
        out.push('\n');
    }
}

fn kind_color(p: &Palette, kind: LineKind) -> Color {
    match kind {
        LineKind::Input | LineKind::Output => p.text,
        LineKind::Error => p.error,
        LineKind::Success => p.success,
        LineKind::Info => p.info,
    }
}

fn emphasis_color(p: &Palette, emphasis: Emphasis) -> Color {
    match emphasis {
        Emphasis::Plain => p.text,
        Emphasis::Accent => p.accent,
        Emphasis::Highlight => p.highlight,
        Emphasis::Strong => p.success,
        Emphasis::Muted => p.muted,
    }
}
