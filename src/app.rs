use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

use crate::action::{Action, Direction};
use crate::config::{Config, parse_key};
use crate::system::collector::Collector;
use crate::system::kill::{KillResult, terminate};
use crate::system::procfs::ProcFs;
use crate::system::snapshot::{Cycle, ProcessRow};
use crate::ui::theme::Theme;

pub const MIN_REFRESH_SECS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub kill: KeyCode,
    pub sort_cpu: KeyCode,
    pub sort_memory: KeyCode,
    pub sort_pid: KeyCode,
    pub faster: KeyCode,
    pub slower: KeyCode,
    pub refresh: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            kill: parse_key(&kb.kill).unwrap_or(KeyCode::Char('k')),
            sort_cpu: parse_key(&kb.sort_cpu).unwrap_or(KeyCode::Char('c')),
            sort_memory: parse_key(&kb.sort_memory).unwrap_or(KeyCode::Char('m')),
            sort_pid: parse_key(&kb.sort_pid).unwrap_or(KeyCode::Char('p')),
            faster: parse_key(&kb.faster).unwrap_or(KeyCode::Char('+')),
            slower: parse_key(&kb.slower).unwrap_or(KeyCode::Char('-')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        let mut entries = vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.sort_cpu), "Sort by CPU"),
            (key_label(self.sort_memory), "Sort by memory"),
            (key_label(self.sort_pid), "Sort by PID"),
            (key_label(self.faster), "Faster refresh"),
            (key_label(self.slower), "Slower refresh"),
            (key_label(self.kill), "Kill process (SIGTERM)"),
            (key_label(self.refresh), "Refresh now"),
            (key_label(self.help), "Toggle help"),
        ];
        entries.push(("↑↓".to_string(), "Move selection"));
        entries.push(("PgUp/PgDn".to_string(), "Move by page"));
        entries.push(("Home/End".to_string(), "First / last"));
        entries.push(("Ctrl+C".to_string(), "Quit (always)"));
        entries
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Cpu,
    Memory,
    Pid,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Cpu => "CPU",
            SortMode::Memory => "Memory",
            SortMode::Pid => "PID",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mem" | "memory" => SortMode::Memory,
            "pid" => SortMode::Pid,
            _ => SortMode::Cpu,
        }
    }

    /// Heaviest consumer first for CPU and memory; lowest pid first for pid.
    pub fn comparator(self) -> fn(&ProcessRow, &ProcessRow) -> Ordering {
        match self {
            SortMode::Cpu => by_cpu_desc,
            SortMode::Memory => by_memory_desc,
            SortMode::Pid => by_pid_asc,
        }
    }
}

fn by_cpu_desc(a: &ProcessRow, b: &ProcessRow) -> Ordering {
    b.metrics.cpu_percent.total_cmp(&a.metrics.cpu_percent)
}

fn by_memory_desc(a: &ProcessRow, b: &ProcessRow) -> Ordering {
    b.metrics.mem_percent.total_cmp(&a.metrics.mem_percent)
}

fn by_pid_asc(a: &ProcessRow, b: &ProcessRow) -> Ordering {
    a.sample.pid.cmp(&b.sample.pid)
}

pub fn sort_rows(rows: &mut [ProcessRow], mode: SortMode) {
    rows.sort_by(mode.comparator());
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub created: Instant,
}

pub struct App {
    pub running: bool,
    pub collector: Collector,
    pub cycle: Cycle,
    pub selected_index: usize,
    pub table_state: TableState,
    /// Body rows the process table showed on the last draw.
    pub visible_rows: usize,
    pub input_mode: InputMode,
    pub sort_mode: SortMode,
    pub refresh_secs: u64,
    pub status_message: Option<StatusMessage>,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: Config) -> Self {
        let collector = Collector::new(ProcFs::new(config.general.proc_root.clone()));
        Self::with_collector(config, collector)
    }

    pub fn with_collector(config: Config, collector: Collector) -> Self {
        let mut app = App {
            running: true,
            collector,
            cycle: Cycle::default(),
            selected_index: 0,
            table_state: TableState::default(),
            visible_rows: 0,
            input_mode: InputMode::Normal,
            sort_mode: SortMode::from_str_config(&config.general.default_sort),
            refresh_secs: config.general.refresh_interval_secs.max(MIN_REFRESH_SECS),
            status_message: None,
            theme: Theme::from_config(&config.general.theme),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        };
        app.refresh_data();
        app
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn refresh_data(&mut self) {
        let cycle = self.collector.refresh();
        self.apply_cycle(cycle);
        self.expire_status(Instant::now());
    }

    /// Installs a freshly derived cycle: sorts it and keeps the selection
    /// inside the new row range.
    pub fn apply_cycle(&mut self, mut cycle: Cycle) {
        sort_rows(&mut cycle.rows, self.sort_mode);
        self.cycle = cycle;
        self.clamp_selection();
    }

    /// Drops a status message set before `now`, so a message lasts until
    /// the refresh after it appeared.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(msg) = &self.status_message
            && msg.created <= now
        {
            self.status_message = None;
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Navigation keys are hardwired (not configurable)
        match code {
            KeyCode::Up => return Action::Navigate(Direction::Up),
            KeyCode::Down => return Action::Navigate(Direction::Down),
            KeyCode::PageUp => return Action::Navigate(Direction::PageUp),
            KeyCode::PageDown => return Action::Navigate(Direction::PageDown),
            KeyCode::Home => return Action::Navigate(Direction::Top),
            KeyCode::End => return Action::Navigate(Direction::Bottom),
            _ => {}
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.kill {
            return match self.selected_pid() {
                Some(pid) => Action::Kill(pid),
                None => Action::None,
            };
        }
        if code == kb.sort_cpu {
            return Action::Sort(SortMode::Cpu);
        }
        if code == kb.sort_memory {
            return Action::Sort(SortMode::Memory);
        }
        if code == kb.sort_pid {
            return Action::Sort(SortMode::Pid);
        }
        if code == kb.faster {
            return Action::Faster;
        }
        if code == kb.slower {
            return Action::Slower;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Navigate(dir) => self.navigate(dir),
            Action::Kill(pid) => {
                if pid == 0 {
                    return;
                }
                // Pids from a captured or synthetic table name no local process.
                let result = if self.collector.procfs().is_host() {
                    terminate(pid)
                } else {
                    KillResult::Failed(
                        pid,
                        format!(
                            "Kill disabled: rows come from {}, not /proc",
                            self.collector.procfs().root().display()
                        ),
                    )
                };
                self.set_kill_status(result);
            }
            Action::Sort(mode) => {
                self.sort_mode = mode;
                sort_rows(&mut self.cycle.rows, mode);
            }
            Action::Faster => {
                self.refresh_secs = self.refresh_secs.saturating_sub(1).max(MIN_REFRESH_SECS);
            }
            Action::Slower => {
                self.refresh_secs = self.refresh_secs.saturating_add(1);
            }
            Action::Refresh => self.refresh_data(),
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::None => {}
        }
    }

    fn navigate(&mut self, direction: Direction) {
        let Some(last) = self.cycle.rows.len().checked_sub(1) else {
            self.selected_index = 0;
            return;
        };
        let page = self.visible_rows.max(1);

        self.selected_index = match direction {
            Direction::Up => self.selected_index.saturating_sub(1),
            Direction::Down => self.selected_index.saturating_add(1).min(last),
            Direction::PageUp => self.selected_index.saturating_sub(page),
            Direction::PageDown => self.selected_index.saturating_add(page).min(last),
            Direction::Top => 0,
            Direction::Bottom => last,
        };
    }

    fn clamp_selection(&mut self) {
        let last = self.cycle.rows.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
    }

    pub fn selected_row(&self) -> Option<&ProcessRow> {
        self.cycle.rows.get(self.selected_index)
    }

    pub fn selected_pid(&self) -> Option<u32> {
        self.selected_row().map(|row| row.sample.pid)
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }

    fn set_kill_status(&mut self, result: KillResult) {
        self.status_message = Some(StatusMessage {
            text: result.message(),
            is_error: !result.is_success(),
            created: Instant::now(),
        });
    }
}
