//! End-to-end behavior of the terminal over the real command set.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use proptest::prelude::*;

use folio_skin::{Theme, ThemePreset};
use folio_terminal::{
    CellPayload, CellSpawner, CellState, CellUpdate, CommandRegistry, FetchKind, Joke,
    KeyOutcome, LineContent, LineId, LineKind, Terminal, register_builtins,
};
use folio_types::input::Key;

/// Records spawned cells instead of fetching.
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<(LineId, FetchKind)>>>);

impl Recorder {
    fn spawned(&self) -> Vec<(LineId, FetchKind)> {
        self.0.borrow().clone()
    }
}

impl CellSpawner for Recorder {
    fn spawn(&self, cell: LineId, kind: FetchKind) {
        self.0.borrow_mut().push((cell, kind));
    }
}

fn registry() -> Arc<CommandRegistry> {
    let mut reg = CommandRegistry::new();
    register_builtins(&mut reg);
    Arc::new(reg)
}

fn terminal() -> (Terminal, Recorder) {
    let rec = Recorder::default();
    let term = Terminal::new(registry(), Theme::default(), "siddharth", Box::new(rec.clone()));
    (term, rec)
}

fn kinds(term: &Terminal) -> Vec<LineKind> {
    term.session().scrollback().iter().map(|l| l.kind).collect()
}

#[test]
fn every_command_appends_input_then_one_result() {
    let names: Vec<String> = registry()
        .list_commands()
        .iter()
        .map(|(n, _)| n.to_string())
        .collect();
    for name in names.iter().filter(|n| *n != "clear") {
        let (mut term, _) = terminal();
        let before = term.session().scrollback().len();
        term.submit(name);
        let added = &term.session().scrollback()[before..];
        assert_eq!(added.len(), 2, "{name}");
        assert_eq!(added[0].kind, LineKind::Input);
        assert!(
            matches!(added[1].kind, LineKind::Output | LineKind::Error),
            "{name}"
        );
    }
}

#[test]
fn empty_submission_only_echoes() {
    let (mut term, _) = terminal();
    term.submit("   ");
    assert_eq!(kinds(&term), vec![LineKind::Output, LineKind::Input]);
    assert!(term.session().history().is_empty());
}

#[test]
fn clear_and_cls_wipe_including_echo() {
    for cmd in ["clear", "cls", "  CLEAR "] {
        let (mut term, _) = terminal();
        term.submit("about");
        term.submit(cmd);
        assert!(term.session().scrollback().is_empty(), "{cmd}");
        assert_eq!(term.session().history().last().map(String::as_str), Some(cmd.trim().to_lowercase().as_str()));
    }
}

#[test]
fn history_round_trip_returns_to_live_edit() {
    let (mut term, _) = terminal();
    for cmd in ["about", "skills", "contact"] {
        term.submit(cmd);
    }
    for _ in 0..3 {
        term.handle_key(Key::Up);
    }
    assert_eq!(term.session().input(), "about");
    for _ in 0..3 {
        term.handle_key(Key::Down);
    }
    assert_eq!(term.session().input(), "");
    assert_eq!(term.session().history_cursor(), None);
}

#[test]
fn tab_completion_over_builtins() {
    let (mut term, _) = terminal();
    term.handle_key(Key::Char('h'));
    term.handle_key(Key::Char('e'));
    assert_eq!(term.handle_key(Key::Tab), KeyOutcome::Edited);
    assert_eq!(term.session().input(), "help");

    let (mut term, _) = terminal();
    term.handle_key(Key::Char('a'));
    assert_eq!(term.handle_key(Key::Tab), KeyOutcome::Ignored);
    assert_eq!(term.session().input(), "a");
}

#[test]
fn unknown_command_error_names_it() {
    let (mut term, _) = terminal();
    term.submit("foobar");
    let last = term.session().scrollback().last().unwrap();
    assert_eq!(last.kind, LineKind::Error);
    assert_eq!(
        last.text(),
        Some("Command not found: foobar. Type 'help' for available commands.")
    );
}

#[test]
fn cells_resolve_out_of_order_in_their_own_slots() {
    let (mut term, rec) = terminal();
    term.submit("joke");
    term.submit("joke");
    let spawned = rec.spawned();
    assert_eq!(spawned.len(), 2);
    let (first, second) = (spawned[0].0, spawned[1].0);
    assert!(first < second);

    let late = CellPayload::Joke(Joke::Single("second".into()));
    assert!(term.apply_cell_update(CellUpdate {
        cell: second,
        result: Ok(late.clone()),
    }));
    assert_eq!(term.cell(first), Some(&CellState::Pending(FetchKind::Joke)));
    assert!(term.apply_cell_update(CellUpdate {
        cell: first,
        result: Err(FetchKind::Joke.failure_text().to_string()),
    }));

    assert_eq!(
        term.cell(first),
        Some(&CellState::Failed("Failed to fetch joke".into()))
    );
    assert_eq!(term.cell(second), Some(&CellState::Resolved(late)));

    // Slots keep submission order: welcome, in, cell, in, cell.
    let lines = term.session().scrollback();
    assert_eq!(lines[2].id, first);
    assert_eq!(lines[4].id, second);
    assert!(lines.iter().filter(|l| l.content == LineContent::Cell).count() == 2);
}

#[test]
fn late_update_after_clear_is_discarded() {
    let (mut term, rec) = terminal();
    term.submit("waifu");
    let (cell, _) = rec.spawned()[0];
    term.handle_key(Key::CtrlL);
    assert!(!term.apply_cell_update(CellUpdate {
        cell,
        result: Ok(CellPayload::Image { url: "https://x".into() }),
    }));
    assert!(term.session().scrollback().is_empty());
}

#[test]
fn theme_change_resets_scrollback_keeps_history() {
    let (mut term, _) = terminal();
    term.submit("about");
    let matrix = ThemePreset::Matrix.load().unwrap();
    term.set_theme(matrix);
    let lines = term.session().scrollback();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].kind, LineKind::Output);
    assert!(lines[0].text().unwrap().starts_with("Wake up, Neo..."));
    assert_eq!(term.session().history(), ["about".to_string()]);
    assert_eq!(term.theme().preset, ThemePreset::Matrix);
}

#[test]
fn reselecting_active_theme_keeps_session() {
    let (mut term, rec) = terminal();
    term.submit("about");
    term.submit("joke");
    let before = term.session().scrollback().len();
    let (cell, _) = rec.spawned()[0];

    term.set_theme(Theme::default());
    assert_eq!(term.session().scrollback().len(), before);
    assert_eq!(term.mounted_cells(), 1);
    assert!(term.apply_cell_update(CellUpdate {
        cell,
        result: Ok(CellPayload::Joke(Joke::Single("still here".into()))),
    }));
}

#[test]
fn whoami_reflects_user() {
    let (mut term, _) = terminal();
    term.submit("whoami");
    assert_eq!(
        term.session().scrollback().last().and_then(|l| l.text()),
        Some("siddharth@portfolio")
    );
}

#[test]
fn date_reads_terminal_clock() {
    let (term, _) = terminal();
    let mut term = term.with_clock(|| time::OffsetDateTime::UNIX_EPOCH);
    term.submit("date");
    assert_eq!(
        term.session().scrollback().last().and_then(|l| l.text()),
        Some("Thu, 01 Jan 1970 00:00:00 +0000")
    );
}

proptest! {
    #[test]
    fn line_ids_strictly_increase(cmds in proptest::collection::vec(
        prop_oneof![
            Just("about"), Just("help"), Just("joke"), Just("clear"),
            Just(""), Just("nope"), Just("date"),
        ],
        0..30,
    )) {
        let (mut term, _) = terminal();
        let mut last_seen: Option<LineId> = term.session().scrollback().last().map(|l| l.id);
        for cmd in cmds {
            term.submit(cmd);
            let lines = term.session().scrollback();
            for pair in lines.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
            }
            if let Some(newest) = lines.last() {
                if let Some(prev) = last_seen {
                    prop_assert!(newest.id > prev);
                }
                last_seen = Some(newest.id);
            }
        }
    }
}
