use std::cell::RefCell;
use std::rc::Rc;

use panes_common::{Coord, Direction, GridError, Size};
use panes_config::{KeysConfig, PanesConfig};
use panes_input::KeyCombo;
use panes_style::Border;

use super::*;
use crate::keymap::KeyMap;
use crate::msg::{Cmd, Msg};
use crate::pane::Pane;

type Log = Rc<RefCell<Vec<String>>>;

/// Records every call it receives into a shared log.
struct Probe {
    name: String,
    log: Log,
    size: Option<Size>,
    reply: bool,
}

impl Probe {
    fn record(&self, event: impl std::fmt::Display) {
        self.log.borrow_mut().push(format!("{} {event}", self.name));
    }
}

impl Pane for Probe {
    fn init(&self) -> Option<Cmd> {
        self.record("init");
        self.reply.then(|| Cmd::perform(|| Msg::Paste("ready".into())))
    }

    fn update(mut self: Box<Self>, msg: Msg) -> (Box<dyn Pane>, Option<Cmd>) {
        match &msg {
            Msg::Key(combo) => self.record(format!("key {combo}")),
            Msg::Resize(size) => {
                self.size = Some(*size);
                self.record(format!("resize {size}"));
            }
            Msg::Paste(text) => self.record(format!("paste {text}")),
            Msg::Custom(_) => self.record("custom"),
        }
        let cmd = self.reply.then_some(Cmd::Quit);
        (self, cmd)
    }

    fn view(&self) -> String {
        match self.size {
            Some(size) => format!("{}@{size}", self.name),
            None => self.name.clone(),
        }
    }

    fn focus(self: Box<Self>) -> Box<dyn Pane> {
        self.record("focus");
        self
    }

    fn blur(self: Box<Self>) -> Box<dyn Pane> {
        self.record("blur");
        self
    }
}

/// Replaces itself with a different pane type on the first key.
struct Fuse;

struct Blown;

impl Pane for Fuse {
    fn update(self: Box<Self>, msg: Msg) -> (Box<dyn Pane>, Option<Cmd>) {
        match msg {
            Msg::Key(_) => (Box::new(Blown), None),
            _ => (self, None),
        }
    }

    fn view(&self) -> String {
        "fuse".into()
    }

    fn focus(self: Box<Self>) -> Box<dyn Pane> {
        self
    }

    fn blur(self: Box<Self>) -> Box<dyn Pane> {
        self
    }
}

impl Pane for Blown {
    fn update(self: Box<Self>, _msg: Msg) -> (Box<dyn Pane>, Option<Cmd>) {
        (self, None)
    }

    fn view(&self) -> String {
        "blown".into()
    }

    fn focus(self: Box<Self>) -> Box<dyn Pane> {
        self
    }

    fn blur(self: Box<Self>) -> Box<dyn Pane> {
        self
    }
}

fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn probe(name: &str, log: &Log) -> Box<dyn Pane> {
    Box::new(Probe {
        name: name.to_string(),
        log: Rc::clone(log),
        size: None,
        reply: false,
    })
}

fn replying_probe(name: &str, log: &Log) -> Box<dyn Pane> {
    Box::new(Probe {
        name: name.to_string(),
        log: Rc::clone(log),
        size: None,
        reply: true,
    })
}

/// Probes named `"<row><col>"`.
fn probe_rows(shape: &[usize], log: &Log) -> Vec<Vec<Box<dyn Pane>>> {
    shape
        .iter()
        .enumerate()
        .map(|(r, &cells)| (0..cells).map(|c| probe(&format!("{r}{c}"), log)).collect())
        .collect()
}

fn grid(shape: &[usize], log: &Log) -> GridManager {
    GridManager::new(probe_rows(shape, log)).unwrap()
}

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

fn ctrl(key: &str) -> Msg {
    Msg::Key(KeyCombo::new(true, false, false, false, key))
}

fn plain(key: &str) -> Msg {
    Msg::Key(KeyCombo::plain(key))
}

fn walk(grid: &mut GridManager, moves: &[Direction]) -> Coord {
    for &direction in moves {
        grid.navigate(direction);
    }
    grid.active()
}

// -- Construction --

#[test]
fn rejects_grid_without_rows() {
    let result = GridManager::new(Vec::new());
    assert!(matches!(result, Err(GridError::EmptyGrid)));
}

#[test]
fn rejects_empty_row() {
    let log = new_log();
    let rows = vec![vec![probe("a", &log)], Vec::new(), vec![probe("b", &log)]];
    let result = GridManager::new(rows);
    assert!(matches!(result, Err(GridError::EmptyRow(1))));
}

#[test]
fn new_grid_starts_at_origin_without_touching_panes() {
    let log = new_log();
    let grid = grid(&[2, 3], &log);
    assert_eq!(grid.active(), Coord::new(0, 0));
    assert_eq!(grid.shape(), vec![2, 3]);
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.row_len(1), Some(3));
    assert_eq!(grid.row_len(2), None);
    assert_eq!(grid.pane_count(), 5);
    assert!(take(&log).is_empty());
}

#[test]
fn pane_lookup() {
    let log = new_log();
    let grid = grid(&[2, 3], &log);
    assert_eq!(grid.pane(Coord::new(1, 2)).map(|p| p.view()).as_deref(), Some("12"));
    assert!(grid.pane(Coord::new(0, 2)).is_none());
    assert!(grid.pane(Coord::new(2, 0)).is_none());
    assert_eq!(grid.active_pane().view(), "00");
}

#[test]
fn with_config_applies_keys_and_styles() {
    let log = new_log();
    let mut config = PanesConfig::default();
    config.keys.quit = vec!["q".into()];
    config.styles.active_border = panes_config::BorderKind::Double;

    let mut grid = GridManager::with_config(probe_rows(&[1], &log), &config).unwrap();
    assert_eq!(grid.styles.active_border, Border::double());
    assert!(grid.dispatch(plain("Q")).is_some_and(|cmd| cmd.is_quit()));
    assert!(grid.dispatch(ctrl("C")).is_none());
}

#[test]
fn debug_shows_shape_and_active() {
    let log = new_log();
    let grid = grid(&[1, 2], &log);
    let out = format!("{grid:?}");
    assert!(out.contains("shape: [1, 2]"));
    assert!(out.contains("active"));
}

// -- Start-up --

#[test]
fn start_inits_every_pane_then_focuses_origin() {
    let log = new_log();
    let mut grid = grid(&[2, 1], &log);
    assert!(grid.start().is_none());
    assert_eq!(take(&log), ["00 init", "01 init", "10 init", "00 focus"]);
}

#[test]
fn start_batches_init_commands() {
    let log = new_log();
    let rows = vec![
        vec![replying_probe("a", &log), probe("b", &log)],
        vec![replying_probe("c", &log)],
    ];
    let mut grid = GridManager::new(rows).unwrap();
    match grid.start() {
        Some(Cmd::Batch(cmds)) => assert_eq!(cmds.len(), 2),
        other => panic!("expected a batch, got {other:?}"),
    }
}

// -- Navigation --

#[test]
fn navigation_clamps_into_shorter_row() {
    let log = new_log();
    let mut grid = grid(&[3, 2], &log);
    use Direction::*;

    assert_eq!(walk(&mut grid, &[Right, Right]), Coord::new(0, 2));
    assert_eq!(walk(&mut grid, &[Down]), Coord::new(1, 1));
    assert_eq!(walk(&mut grid, &[Up]), Coord::new(0, 1));
}

#[test]
fn navigation_keeps_column_into_longer_row() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);
    use Direction::*;

    assert_eq!(walk(&mut grid, &[Right, Down]), Coord::new(1, 1));
    assert_eq!(walk(&mut grid, &[Right]), Coord::new(1, 2));
    assert_eq!(walk(&mut grid, &[Up]), Coord::new(0, 1));
}

#[test]
fn navigation_saturates_at_edges() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);

    assert!(!grid.navigate(Direction::Up));
    assert!(!grid.navigate(Direction::Left));
    assert_eq!(grid.active(), Coord::new(0, 0));

    for _ in 0..5 {
        grid.navigate(Direction::Right);
        grid.navigate(Direction::Down);
    }
    assert_eq!(grid.active(), Coord::new(1, 2));
    assert!(!grid.navigate(Direction::Right));
    assert!(!grid.navigate(Direction::Down));
}

#[test]
fn single_pane_grid_never_moves() {
    let log = new_log();
    let mut grid = grid(&[1], &log);
    for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        assert!(!grid.navigate(direction));
    }
    assert!(take(&log).is_empty());
}

#[test]
fn random_walks_stay_in_bounds() {
    let shapes: [&[usize]; 4] = [&[1], &[3, 2], &[2, 3], &[4, 1, 5, 2]];
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

    for shape in shapes {
        let log = new_log();
        let mut grid = grid(shape, &log);
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            grid.navigate(directions[(seed % 4) as usize]);

            let Coord { row, col } = grid.active();
            assert!(row < shape.len(), "row {row} out of bounds for {shape:?}");
            assert!(col < shape[row], "col {col} out of bounds for {shape:?}");
        }
    }
}

#[test]
fn focus_hooks_run_only_when_active_pane_changes() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);
    grid.start();
    take(&log);

    assert!(grid.navigate(Direction::Right));
    assert_eq!(take(&log), ["00 blur", "01 focus"]);

    assert!(!grid.navigate(Direction::Right));
    assert!(!grid.navigate(Direction::Up));
    assert!(take(&log).is_empty());

    assert!(grid.navigate(Direction::Down));
    assert_eq!(take(&log), ["01 blur", "11 focus"]);
}

#[test]
fn navigation_keys_are_consumed() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);

    assert!(grid.dispatch(ctrl("L")).is_none());
    assert!(grid.dispatch(ctrl("J")).is_none());
    assert_eq!(grid.active(), Coord::new(1, 1));

    assert!(grid.dispatch(ctrl("H")).is_none());
    assert!(grid.dispatch(ctrl("K")).is_none());
    assert_eq!(grid.active(), Coord::new(0, 0));

    assert!(take(&log).iter().all(|entry| !entry.contains("key")));
}

#[test]
fn disabled_binding_reaches_the_pane() {
    let log = new_log();
    let mut grid = grid(&[2], &log);
    grid.keymap.right.set_enabled(false);

    grid.dispatch(ctrl("L"));
    assert_eq!(grid.active(), Coord::new(0, 0));
    assert_eq!(take(&log), ["00 key Ctrl+L"]);
}

#[test]
fn custom_keymap_replaces_defaults() {
    let log = new_log();
    let keys = KeysConfig {
        right: vec!["tab".into()],
        ..Default::default()
    };
    let mut grid = grid(&[2], &log).with_keymap(KeyMap::from_config(&keys));

    grid.dispatch(plain("Tab"));
    assert_eq!(grid.active(), Coord::new(0, 1));
}

// -- Quit --

#[test]
fn quit_key_returns_quit_and_reaches_no_pane() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);
    grid.navigate(Direction::Down);
    take(&log);

    let cmd = grid.dispatch(ctrl("C"));
    assert!(cmd.is_some_and(|cmd| cmd.is_quit()));
    assert_eq!(grid.active(), Coord::new(1, 0));
    assert!(take(&log).is_empty());
}

// -- Resize --

#[test]
fn resize_reaches_every_pane_with_its_row_size() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);

    assert!(grid.dispatch(Msg::Resize(Size::new(100, 50))).is_none());
    assert_eq!(
        take(&log),
        [
            "00 resize 48x23",
            "01 resize 48x23",
            "10 resize 31x23",
            "11 resize 31x23",
            "12 resize 31x23",
        ]
    );
    assert_eq!(grid.active(), Coord::new(0, 0));
}

#[test]
fn cell_size_matches_resizers() {
    let log = new_log();
    let grid = grid(&[2, 3], &log);
    let total = Size::new(100, 50);
    assert_eq!(grid.cell_size(0, total), Some(Size::new(48, 23)));
    assert_eq!(grid.cell_size(1, total), Some(Size::new(31, 23)));
    assert_eq!(grid.cell_size(2, total), None);
}

#[test]
fn resize_too_small_for_borders_saturates() {
    let log = new_log();
    let mut grid = grid(&[1, 3], &log);
    grid.dispatch(Msg::Resize(Size::new(5, 3)));
    let entries = take(&log);
    assert_eq!(entries[0], "00 resize 3x0");
    assert_eq!(entries[1], "10 resize 0x0");
}

#[test]
fn resize_batches_pane_commands() {
    let log = new_log();
    let rows = vec![
        vec![replying_probe("a", &log), probe("b", &log)],
        vec![replying_probe("c", &log), replying_probe("d", &log)],
    ];
    let mut grid = GridManager::new(rows).unwrap();
    match grid.dispatch(Msg::Resize(Size::new(40, 20))) {
        Some(Cmd::Batch(cmds)) => {
            assert_eq!(cmds.len(), 3);
            assert!(cmds.iter().all(Cmd::is_quit));
        }
        other => panic!("expected a batch, got {other:?}"),
    }
}

// -- Forwarding --

#[test]
fn other_messages_reach_only_the_active_pane_once() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);
    grid.navigate(Direction::Right);
    take(&log);

    grid.dispatch(plain("X"));
    grid.dispatch(Msg::Paste("hello".into()));
    grid.dispatch(Msg::custom(42_u32));
    assert_eq!(take(&log), ["01 key X", "01 paste hello", "01 custom"]);
}

#[test]
fn forwarded_command_is_returned() {
    let log = new_log();
    let rows = vec![vec![replying_probe("a", &log), probe("b", &log)]];
    let mut grid = GridManager::new(rows).unwrap();

    assert!(grid.dispatch(plain("X")).is_some_and(|cmd| cmd.is_quit()));
    grid.navigate(Direction::Right);
    assert!(grid.dispatch(plain("X")).is_none());
}

#[test]
fn repeated_message_after_round_trip_renders_same_frame() {
    let log = new_log();
    let mut grid = grid(&[2, 3], &log);
    grid.dispatch(Msg::Resize(Size::new(30, 12)));

    grid.dispatch(Msg::Paste("q".into()));
    let first = grid.compose();

    grid.dispatch(ctrl("L"));
    grid.dispatch(ctrl("H"));
    grid.dispatch(Msg::Paste("q".into()));
    let second = grid.compose();

    assert_eq!(grid.active(), Coord::new(0, 0));
    assert_eq!(first, second);
    let pastes: Vec<_> = take(&log)
        .into_iter()
        .filter(|entry| entry.contains("paste"))
        .collect();
    assert_eq!(pastes, ["00 paste q", "00 paste q"]);
}

#[test]
fn pane_may_replace_itself_with_another_type() {
    let log = new_log();
    let rows = vec![vec![Box::new(Fuse) as Box<dyn Pane>, probe("b", &log)]];
    let mut grid = GridManager::new(rows).unwrap();

    assert_eq!(grid.active_pane().view(), "fuse");
    grid.dispatch(plain("X"));
    assert_eq!(grid.active_pane().view(), "blown");
    assert!(grid.compose().contains("blown"));
}

// -- Composition --

#[test]
fn compose_borders_active_and_pads_inactive() {
    let log = new_log();
    let rows = vec![vec![probe("a", &log), probe("b", &log)]];
    let mut grid = GridManager::new(rows).unwrap();

    assert_eq!(grid.compose(), "╭─╮   \n│a│ b \n╰─╯   ");
    grid.navigate(Direction::Right);
    assert_eq!(grid.compose(), "   ╭─╮\n a │b│\n   ╰─╯");
}

#[test]
fn compose_aligns_ragged_rows_left() {
    let log = new_log();
    let rows = vec![vec![probe("a", &log)], vec![probe("b", &log), probe("c", &log)]];
    let grid = GridManager::new(rows).unwrap();

    assert_eq!(
        grid.compose(),
        "╭─╮   \n│a│   \n╰─╯   \n      \n b  c \n      "
    );
}

#[test]
fn compose_does_not_call_pane_hooks() {
    let log = new_log();
    let grid = grid(&[2, 2], &log);
    grid.compose();
    assert!(take(&log).is_empty());
}

// -- Nesting --

fn nested(log: &Log) -> GridManager {
    let inner_keys = KeysConfig {
        left: vec!["alt+h".into()],
        right: vec!["alt+l".into()],
        up: vec!["alt+k".into()],
        down: vec!["alt+j".into()],
        quit: vec!["ctrl+q".into()],
    };
    let inner = GridManager::new(vec![vec![probe("i0", log), probe("i1", log)]])
        .unwrap()
        .with_keymap(KeyMap::from_config(&inner_keys));
    GridManager::new(vec![vec![Box::new(inner) as Box<dyn Pane>, probe("p", log)]]).unwrap()
}

#[test]
fn nested_grid_starts_with_outer() {
    let log = new_log();
    let mut outer = nested(&log);
    outer.start();
    assert_eq!(take(&log), ["i0 init", "i1 init", "p init", "i0 focus"]);
}

#[test]
fn nested_grid_receives_its_cell_size() {
    let log = new_log();
    let mut outer = nested(&log);
    outer.dispatch(Msg::Resize(Size::new(100, 50)));
    assert_eq!(
        take(&log),
        ["i0 resize 22x46", "i1 resize 22x46", "p resize 48x48"]
    );
}

#[test]
fn nested_grid_handles_its_own_bindings() {
    let log = new_log();
    let mut outer = nested(&log);
    outer.start();
    take(&log);

    assert!(outer.dispatch(Msg::Key(KeyCombo::new(false, true, false, false, "L"))).is_none());
    assert_eq!(take(&log), ["i0 blur", "i1 focus"]);

    outer.dispatch(plain("X"));
    assert_eq!(take(&log), ["i1 key X"]);
}

#[test]
fn leaving_nested_grid_blurs_its_active_pane() {
    let log = new_log();
    let mut outer = nested(&log);
    outer.start();
    take(&log);

    outer.dispatch(ctrl("L"));
    assert_eq!(take(&log), ["i0 blur", "p focus"]);
    outer.dispatch(ctrl("H"));
    assert_eq!(take(&log), ["p blur", "i0 focus"]);
}

#[test]
fn nested_grid_renders_inside_outer_cell() {
    let log = new_log();
    let outer = nested(&log);
    let frame = outer.compose();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines[0], "╭────────╮   ");
    assert_eq!(lines[1], "│╭──╮    │ p ");
    assert_eq!(lines[2], "││i0│ i1 │   ");
    assert_eq!(lines.len(), 5);
}
