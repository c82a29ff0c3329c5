use embassy_time::Duration;
use smart_leds::RGB8;

// The matrix is 5 rows of 5 WS2812 cells, chained row-major.
pub const ROW_COUNT: usize = 5;
pub const COLUMN_COUNT: usize = 5;
pub const CELL_COUNT: usize = ROW_COUNT * COLUMN_COUNT;

/// Presses closer than this to the last accepted press (on either button) are contact bounce.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_micros(200_000);

pub const BLINK_ON_DELAY: Duration = Duration::from_millis(150);
pub const BLINK_OFF_DELAY: Duration = Duration::from_millis(50);

/// Lit cells use this color.
pub const DEFAULT_COLOR: RGB8 = RGB8::new(1, 1, 1);

/// WS2812 bit rate in kHz.
pub const WS2812_FREQUENCY_KHZ: u32 = 800;
