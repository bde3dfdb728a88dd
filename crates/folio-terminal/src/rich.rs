//! Structured command output.
//!
//! A `RichBlock` is a titled card of paragraphs made of styled spans. The
//! renderer decides what each [`Emphasis`] looks like.

/// How a span should stand out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Emphasis {
    #[default]
    Plain,
    /// Names and headings.
    Accent,
    /// Places and organisations.
    Highlight,
    /// Technologies and strengths.
    Strong,
    Muted,
}

/// A run of text with one emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Emphasis::Plain)
    }

    pub fn styled(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

/// A titled card of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichBlock {
    pub title: String,
    pub paragraphs: Vec<Vec<Span>>,
    pub footer: Option<String>,
}

impl RichBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn paragraph(mut self, spans: Vec<Span>) -> Self {
        self.paragraphs.push(spans);
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Unstyled text: title, paragraphs separated by blank lines, footer.
    pub fn plain_text(&self) -> String {
        let mut out = self.title.clone();
        for paragraph in &self.paragraphs {
            out.push_str("\n\n");
            for span in paragraph {
                out.push_str(&span.text);
            }
        }
        if let Some(footer) = &self.footer {
            out.push_str("\n\n");
            out.push_str(footer);
        }
        out
    }
}
