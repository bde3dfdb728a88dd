//! Built-in portfolio commands.

use std::fmt::Write as _;

use time::format_description::well_known::Rfc2822;

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::rich::{Emphasis, RichBlock, Span};

/// Register the portfolio command set into a registry.
///
/// Includes the network-backed commands from `fun_commands`.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    for page in PAGES {
        reg.register(Box::new(page));
    }
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(ClearCmd));
    crate::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show this help message"
    }
    fn execute(&self, env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = String::from("Available commands:");
        for (name, description) in env.registry.list_commands() {
            let _ = write!(out, "\n  {name:<14}- {description}");
        }
        Ok(CommandOutput::Text(out))
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn about me"
    }
    fn execute(&self, _env: &Environment<'_>) -> Result<CommandOutput> {
        let block = RichBlock::new("┌ ABOUT ME ┐")
            .paragraph(vec![
                Span::plain("Hi! I'm "),
                Span::styled("Siddharth Jindal", Emphasis::Accent),
                Span::plain(
                    ", a passionate Software Developer and AI Engineer currently pursuing \
                     my B.Tech in Electronics & Computer Engineering at ",
                ),
                Span::styled(
                    "Thapar Institute of Engineering and Technology",
                    Emphasis::Highlight,
                ),
                Span::plain(", Patiala."),
            ])
            .paragraph(vec![
                Span::plain("I specialize in building "),
                Span::styled("full-stack applications", Emphasis::Strong),
                Span::plain(", "),
                Span::styled("AI/ML systems", Emphasis::Strong),
                Span::plain(", and "),
                Span::styled("RAG pipelines", Emphasis::Strong),
                Span::plain(
                    ". I have hands-on experience with LLMs, LangChain, vector databases, \
                     and modern web technologies.",
                ),
            ])
            .paragraph(vec![
                Span::plain("Currently working as an "),
                Span::styled("SDE Intern at a21.ai", Emphasis::Accent),
                Span::plain(
                    ", building Text-to-SQL AI agents and RAG pipelines for enterprise databases.",
                ),
            ])
            .footer("Competitive Programmer • CodeChef 3-Star • 500+ problems solved");
        Ok(CommandOutput::Rich(block))
    }
}

// ---------------------------------------------------------------------------
// static pages
// ---------------------------------------------------------------------------

/// A command that prints a fixed page of text.
#[derive(Clone, Copy)]
struct PageCmd {
    name: &'static str,
    description: &'static str,
    body: &'static str,
}

const PAGES: [PageCmd; 6] = [
    PageCmd {
        name: "skills",
        description: "View my technical skills",
        body: include_str!("../../../content/skills.txt"),
    },
    PageCmd {
        name: "projects",
        description: "Browse my projects",
        body: include_str!("../../../content/projects.txt"),
    },
    PageCmd {
        name: "experience",
        description: "View my work experience",
        body: include_str!("../../../content/experience.txt"),
    },
    PageCmd {
        name: "education",
        description: "View my education",
        body: include_str!("../../../content/education.txt"),
    },
    PageCmd {
        name: "achievements",
        description: "View my achievements & certifications",
        body: include_str!("../../../content/achievements.txt"),
    },
    PageCmd {
        name: "contact",
        description: "Get my contact information",
        body: include_str!("../../../content/contact.txt"),
    },
];

impl Command for PageCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn execute(&self, _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(self.body.trim_end().to_string()))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn execute(&self, env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!("{}@portfolio", env.user)))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn execute(&self, env: &Environment<'_>) -> Result<CommandOutput> {
        let text = env
            .now
            .format(&Rfc2822)
            .map_err(|e| FolioError::Command(format!("date: {e}")))?;
        Ok(CommandOutput::Text(text))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

/// Listed in `help`; the dispatcher intercepts `clear` and `cls` first.
struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn execute(&self, _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
