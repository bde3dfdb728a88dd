//! Host input lines.
//!
//! Lines starting with `:` drive the desktop (window, theme, icons) and the
//! editor keys a line-based terminal can't send. Everything else is typed
//! into the terminal and submitted.

use folio_types::error::{FolioError, Result};
use folio_types::geometry::Point;

/// One parsed line of host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostInput {
    /// Text typed at the prompt, then Enter. Empty submits the current
    /// input buffer as it stands.
    Line(String),
    Meta(MetaCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Theme(String),
    Themes,
    Minimize,
    Restore,
    Maximize,
    Drag(Point, Point),
    Resize(Point, Point),
    /// Press and release the pointer at a point (buttons, affordance).
    Click(Point),
    Icons,
    Open(String),
    Window,
    Up,
    Down,
    Tab(String),
    Cls,
    Help,
    Quit,
}

pub const META_HELP: &str = "\
Host commands:
  :theme <id>              switch theme (resets the scrollback)
  :themes                  list themes
  :min | :restore | :max   minimize, restore, toggle maximize
  :drag x0 y0 x1 y1        drag the title bar from one point to another
  :resize x0 y0 x1 y1      drag the resize grip from one point to another
  :click x y               click the window chrome or the taskbar button
  :icons                   list desktop icons
  :open <icon>             double-click a desktop icon
  :window                  show window geometry
  :up | :down              history navigation
  :tab <prefix>            type a prefix and press Tab
  :cls                     Ctrl-L
  :quit                    exit";

pub fn parse(line: &str) -> Result<HostInput> {
    let Some(meta) = line.trim_start().strip_prefix(':') else {
        return Ok(HostInput::Line(line.to_string()));
    };
    let mut words = meta.split_whitespace();
    let name = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();
    let cmd = match (name.as_str(), args.as_slice()) {
        ("theme", [id]) => MetaCommand::Theme((*id).to_string()),
        ("themes", []) => MetaCommand::Themes,
        ("min", []) => MetaCommand::Minimize,
        ("restore", []) => MetaCommand::Restore,
        ("max", []) => MetaCommand::Maximize,
        ("drag", coords) => {
            let (from, to) = two_points(coords, "drag")?;
            MetaCommand::Drag(from, to)
        }
        ("resize", coords) => {
            let (from, to) = two_points(coords, "resize")?;
            MetaCommand::Resize(from, to)
        }
        ("click", [x, y]) => {
            let coord = |v: &str| {
                v.parse::<i32>()
                    .map_err(|e| FolioError::Command(format!(":click: {e}")))
            };
            MetaCommand::Click(Point::new(coord(*x)?, coord(*y)?))
        }
        ("icons", []) => MetaCommand::Icons,
        ("open", [_, ..]) => MetaCommand::Open(args.join(" ")),
        ("window", []) => MetaCommand::Window,
        ("up", []) => MetaCommand::Up,
        ("down", []) => MetaCommand::Down,
        ("tab", [prefix]) => MetaCommand::Tab((*prefix).to_string()),
        ("tab", []) => MetaCommand::Tab(String::new()),
        ("cls", []) => MetaCommand::Cls,
        ("help", []) => MetaCommand::Help,
        ("quit" | "q" | "exit", []) => MetaCommand::Quit,
        _ => {
            return Err(FolioError::Command(format!(
                "unknown host command ':{meta}' (try :help)"
            )));
        }
    };
    Ok(HostInput::Meta(cmd))
}

fn two_points(coords: &[&str], what: &str) -> Result<(Point, Point)> {
    let nums = coords
        .iter()
        .map(|c| c.parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| FolioError::Command(format!(":{what}: {e}")))?;
    match nums.as_slice() {
        [x0, y0, x1, y1] => Ok((Point::new(*x0, *y0), Point::new(*x1, *y1))),
        _ => Err(FolioError::Command(format!(":{what} takes x0 y0 x1 y1"))),
    }
}
