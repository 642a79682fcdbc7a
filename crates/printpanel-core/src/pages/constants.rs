//! Shared layout constants for the panel pages

/// Outer margin between the display edge and page content
pub const PAGE_MARGIN_PX: u32 = 8;

/// Header strip holding the page title
pub const PAGE_HEADER_HEIGHT_PX: u32 = 40;

/// Footer strip holding the lock or Back button
pub const FOOTER_HEIGHT_PX: u32 = 44;

/// Gap between grid buttons and between page sections
pub const BUTTON_GAP_PX: u32 = 8;

/// Home grid: one button per parameter
pub const HOME_COLUMNS: u32 = 2;
pub const HOME_ROWS: u32 = 4;

/// Preset grid on a parameter page
pub const PRESET_COLUMNS: u32 = 3;
pub const PRESET_ROWS: u32 = 4;

/// Width of the lock and Back buttons
pub const FOOTER_BUTTON_WIDTH_PX: u32 = 140;

pub const HOME_TITLE: &str = "Print Settings";

pub const LOCKED_LABEL: &str = "Locked";
pub const UNLOCKED_LABEL: &str = "Unlocked";
pub const BACK_LABEL: &str = "Back";

/// Hint beside the lock button while navigation is disabled
pub const LOCKED_HINT: &str = "Unlock to change settings";
