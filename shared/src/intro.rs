use crate::config::{
    INTRO_COLUMNS, INTRO_DONE_AT_MS, INTRO_EXIT_AT_MS, INTRO_FLOAT_PHASE_CAP_MS,
    INTRO_JITTER_CAP_MS, INTRO_ROWS, INTRO_STEP_MS,
};
use crate::draft::TeamEntry;
use crate::reference::ReferenceDataset;
use crate::stagger::{hash01, hashed_ms};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Showing,
    Exiting,
    Done,
}

/// Wall-clock offsets (from mount) of the two phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroSchedule {
    pub exit_at_ms: u32,
    pub done_at_ms: u32,
}

impl Default for IntroSchedule {
    fn default() -> Self {
        Self {
            exit_at_ms: INTRO_EXIT_AT_MS,
            done_at_ms: INTRO_DONE_AT_MS,
        }
    }
}

impl IntroSchedule {
    /// Each phase change paired with its offset, earliest first.
    pub fn transitions(&self) -> [(u32, IntroPhase); 2] {
        [
            (self.exit_at_ms, IntroPhase::Exiting),
            (self.done_at_ms, IntroPhase::Done),
        ]
    }
}

/// Holds the handles of a pending schedule. Replacing or clearing the slot
/// drops the previous handles, which must cancel them.
#[derive(Debug)]
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TimerSlot<H> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn replace(&mut self, handles: H) {
        self.pending = Some(handles);
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Grid shape and timing of the center-outward reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerConfig {
    pub rows: usize,
    pub columns: usize,
    pub step_ms: f64,
    pub jitter_cap_ms: f64,
    pub float_phase_cap_ms: f64,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            rows: INTRO_ROWS,
            columns: INTRO_COLUMNS,
            step_ms: INTRO_STEP_MS,
            jitter_cap_ms: INTRO_JITTER_CAP_MS,
            float_phase_cap_ms: INTRO_FLOAT_PHASE_CAP_MS,
        }
    }
}

impl StaggerConfig {
    fn center(&self) -> (f64, f64) {
        (
            self.rows.saturating_sub(1) as f64 / 2.0,
            self.columns.saturating_sub(1) as f64 / 2.0,
        )
    }

    /// Manhattan distance from the grid midpoint, scaled, plus jitter
    /// seeded by `jitter_key`.
    pub fn entry_delay_ms(&self, row: usize, col: usize, jitter_key: &str) -> u32 {
        let (center_row, center_col) = self.center();
        let dist = (row as f64 - center_row).abs() + (col as f64 - center_col).abs();
        (dist * self.step_ms + hash01(jitter_key) * self.jitter_cap_ms).round() as u32
    }
}

fn row_prefix(row: usize) -> String {
    // Row keys read "a-", "b-", ... so re-renders hash identically.
    let letter = char::from(b'a' + (row % 26) as u8);
    format!("{letter}-")
}

fn float_key(row: usize, id: &str) -> String {
    if row == 0 {
        format!("float-{id}")
    } else {
        format!("float-{}{id}", row_prefix(row))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntroTile {
    pub id: String,
    pub colors: Vec<String>,
    pub row: usize,
    pub col: usize,
    pub entry_delay_ms: u32,
    pub float_phase_ms: u32,
}

impl IntroTile {
    /// CSS `animation-delay` for the entry and float animations.
    pub fn animation_delay(&self) -> String {
        format!("{}ms, {}ms", self.entry_delay_ms, self.float_phase_ms)
    }
}

/// Lay out reference teams row-major and schedule each tile.
pub fn intro_rows(teams: &[&TeamEntry], config: &StaggerConfig) -> Vec<Vec<IntroTile>> {
    let limit = config.rows * config.columns;
    if config.columns == 0 {
        return Vec::new();
    }
    teams
        .iter()
        .take(limit)
        .collect::<Vec<_>>()
        .chunks(config.columns)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, team)| IntroTile {
                    id: team.id.clone(),
                    colors: team.colors.clone(),
                    row,
                    col,
                    entry_delay_ms: config.entry_delay_ms(
                        row,
                        col,
                        &format!("{}{}", row_prefix(row), team.id),
                    ),
                    float_phase_ms: hashed_ms(&float_key(row, &team.id), config.float_phase_cap_ms),
                })
                .collect()
        })
        .collect()
}

/// Intro tiles for the bundled 2x24 grid, built from reference data rather
/// than the stored draft so the intro never changes between visits.
pub fn reference_intro(reference: &ReferenceDataset) -> Vec<Vec<IntroTile>> {
    let config = StaggerConfig::default();
    intro_rows(&reference.roster(config.rows * config.columns), &config)
}
