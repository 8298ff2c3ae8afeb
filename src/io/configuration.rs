//! Crate-wide constants and command-line defaults

/// Fixed seed for reproducible random placement
pub const DEFAULT_SEED: u64 = 42;

/// Default number of columns of a command-line grid
pub const DEFAULT_GRID_WIDTH: i32 = 10;
/// Default number of rows of a command-line grid
pub const DEFAULT_GRID_HEIGHT: i32 = 10;

// Keeps rasters and masks of a bounded grid to a sane allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: i32 = 10_000;

/// Number of random anchors tried per element before giving up
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 64;

/// Stack size of profiles that do not stack
pub const DEFAULT_MAX_STACK: u32 = 1;

// Rendering settings
/// Side length of one grid cell in exported images, in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 16;
/// Character drawn for empty cells in text renderings
pub const EMPTY_CELL_SYMBOL: char = '.';
/// Characters assigned to elements in text renderings, cycled when exhausted
pub const ELEMENT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// RGBA colours assigned to elements in exported images, cycled when exhausted
pub const ELEMENT_PALETTE: [[u8; 4]; 8] = [
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [0, 130, 200, 255],
    [245, 130, 48, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [210, 245, 60, 255],
];
/// Largest number of pixels an exported image may hold
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;
/// RGBA colour of empty cells in exported images
pub const EMPTY_CELL_COLOUR: [u8; 4] = [0, 0, 0, 0];

/// Suffix appended to a snapshot's file stem for rendered images
pub const RENDER_SUFFIX: &str = "_grid";
