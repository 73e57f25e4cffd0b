//! Compile-time configuration shared by the core and the browser client.

/// Local storage key holding the serialized draft. Bump the suffix on any
/// incompatible format change; old data is simply never read again.
pub const DRAFT_STORAGE_KEY: &str = "wc2026-bracket-draft-v5";
/// Local storage key holding the saved identity as a plain string.
pub const NAME_STORAGE_KEY: &str = "wc2026-bracket-name-v1";

/// Vertical gap between an anchor's bottom edge and its dropdown menu.
pub const MENU_GAP_PX: f64 = 6.0;

/// How long the save bar shows its confirmation state.
pub const SAVE_CONFIRM_MS: u32 = 1_500;

/// Intro overlay starts fading out at this point after mount.
pub const INTRO_EXIT_AT_MS: u32 = 950;
/// Intro overlay is removed and the page becomes interactive.
pub const INTRO_DONE_AT_MS: u32 = 1_550;

pub const INTRO_ROWS: usize = 2;
pub const INTRO_COLUMNS: usize = 24;
pub const INTRO_TILE_LIMIT: usize = INTRO_ROWS * INTRO_COLUMNS;

/// Per-step delay for the center-outward reveal (Manhattan distance units).
pub const INTRO_STEP_MS: f64 = 28.0;
/// Upper bound of the hash-derived jitter added to each tile.
pub const INTRO_JITTER_CAP_MS: f64 = 70.0;
/// Upper bound of the hash-derived phase offset of the idle float animation.
pub const INTRO_FLOAT_PHASE_CAP_MS: f64 = 900.0;

/// Colors used when a dataset record carries none.
pub const FALLBACK_TEAM_COLORS: [&str; 2] = ["#6B7280", "#9CA3AF"];
pub const FALLBACK_TEAM_NAME: &str = "Unknown";
