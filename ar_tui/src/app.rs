//! Application state

use ar_core::{
    calculate,
    calculator::{CalculationRequest, CalculationResult},
    ConfigError, Dataset, StatKey, Stats, Weapon,
};

/// Highest value a stat can be set to
pub const MAX_STAT: u32 = 99;

/// Upgrade bound used when the weapon's path has no reinforcement table
pub const FALLBACK_MAX_UPGRADE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Breakdown,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Breakdown, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "AR",
            Tab::Breakdown => "Scaling",
            Tab::Help => "Help",
        }
    }
}

/// An editable input on the calculator tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weapon,
    Stat(StatKey),
    TwoHand,
    Upgrade,
    Affinity,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Weapon,
            Field::Stat(StatKey::Str),
            Field::Stat(StatKey::Dex),
            Field::Stat(StatKey::Int),
            Field::Stat(StatKey::Fth),
            Field::Stat(StatKey::Arc),
            Field::TwoHand,
            Field::Upgrade,
            Field::Affinity,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Weapon => "Weapon",
            Field::Stat(StatKey::Str) => "Strength",
            Field::Stat(StatKey::Dex) => "Dexterity",
            Field::Stat(StatKey::Int) => "Intelligence",
            Field::Stat(StatKey::Fth) => "Faith",
            Field::Stat(StatKey::Arc) => "Arcane",
            Field::TwoHand => "Two-handed",
            Field::Upgrade => "Upgrade",
            Field::Affinity => "Affinity",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub dataset: Dataset,
    /// Message shown instead of the calculator when the dataset failed to load
    pub load_error: Option<String>,
    pub selected_weapon: usize,
    pub stats: Stats,
    pub two_handed: bool,
    pub upgrade_level: u32,
    pub selected_affinity: usize,
    pub focus: usize,
    pub result: Option<CalculationResult>,
    pub show_help: bool,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        let mut app = App {
            current_tab: Tab::Calculator,
            dataset,
            load_error: None,
            selected_weapon: 0,
            stats: Stats::uniform(10),
            two_handed: false,
            upgrade_level: 0,
            selected_affinity: 0,
            focus: 0,
            result: None,
            show_help: false,
        };
        app.recalculate();
        app
    }

    /// App showing a load failure
    pub fn with_error(message: String) -> Self {
        let mut app = App::new(Dataset::default());
        app.load_error = Some(message);
        app
    }

    /// App for a load attempt; failures land on the load-error screen
    pub fn from_load(loaded: Result<Dataset, ConfigError>, source: &str) -> Self {
        match loaded {
            Ok(dataset) => App::new(dataset),
            Err(err) => {
                tracing::error!("failed to load {}: {}", source, err);
                App::with_error(format!("{}: {}", source, err))
            }
        }
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.dataset.weapons.get(self.selected_weapon)
    }

    pub fn affinity(&self) -> &str {
        self.dataset
            .affinity_rules
            .get(self.selected_affinity)
            .map(|rule| rule.affinity.as_str())
            .unwrap_or("Standard")
    }

    pub fn focused_field(&self) -> Field {
        Field::all()[self.focus]
    }

    /// Highest upgrade level for the selected weapon
    pub fn max_upgrade(&self) -> u32 {
        self.weapon()
            .and_then(|w| self.dataset.max_upgrade_level(&w.upgrade_path))
            .unwrap_or(FALLBACK_MAX_UPGRADE)
    }

    /// Rerun the calculation for the current inputs
    pub fn recalculate(&mut self) {
        self.result = self.weapon().and_then(|weapon| {
            let request = CalculationRequest::new(weapon.id.as_str(), self.stats)
                .two_handed(self.two_handed)
                .upgrade_level(self.upgrade_level)
                .affinity(self.affinity());
            match calculate(&self.dataset, &request) {
                Ok(result) => Some(result),
                Err(err) => {
                    tracing::warn!("calculation failed: {}", err);
                    None
                }
            }
        });
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn on_up(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.focus + 1 < Field::all().len() {
            self.focus += 1;
        }
    }

    pub fn on_left(&mut self) {
        self.adjust(-1);
    }

    pub fn on_right(&mut self) {
        self.adjust(1);
    }

    pub fn on_page_down(&mut self) {
        self.adjust(-10);
    }

    pub fn on_page_up(&mut self) {
        self.adjust(10);
    }

    pub fn toggle_two_hand(&mut self) {
        self.two_handed = !self.two_handed;
        self.recalculate();
    }

    /// Reset stats and upgrade choices, keeping the selected weapon
    pub fn reset(&mut self) {
        self.stats = Stats::uniform(10);
        self.two_handed = false;
        self.upgrade_level = 0;
        self.selected_affinity = 0;
        self.recalculate();
    }

    /// Change the focused field by `delta` steps
    fn adjust(&mut self, delta: i64) {
        match self.focused_field() {
            Field::Weapon => {
                let count = self.dataset.weapons.len();
                self.selected_weapon = cycle(self.selected_weapon, count, delta.signum());
                self.upgrade_level = self.upgrade_level.min(self.max_upgrade());
            }
            Field::Stat(key) => {
                let value = step(self.stats.get(key), delta, MAX_STAT);
                self.stats.set(key, value);
            }
            Field::TwoHand => self.two_handed = !self.two_handed,
            Field::Upgrade => {
                self.upgrade_level = step(self.upgrade_level, delta, self.max_upgrade());
            }
            Field::Affinity => {
                let count = self.dataset.affinity_rules.len();
                self.selected_affinity = cycle(self.selected_affinity, count, delta.signum());
            }
        }
        self.recalculate();
    }
}

/// Move `value` by `delta`, clamped to `0..=max`
fn step(value: u32, delta: i64, max: u32) -> u32 {
    (value as i64 + delta).clamp(0, max as i64) as u32
}

/// Move an index by one position with wrap-around
fn cycle(index: usize, count: usize, direction: i64) -> usize {
    if count == 0 {
        return 0;
    }
    if direction < 0 {
        (index + count - 1) % count
    } else {
        (index + 1) % count
    }
}
