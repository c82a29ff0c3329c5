//! Turns button edges into digit changes and refresh requests.
//!
//! See [`InputController`] for the debounce rules.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use crate::{DEBOUNCE_WINDOW, Digit};

/// Which button fired.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Increment,
    Decrement,
}

/// What [`InputController::on_edge`] did with an edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Within the debounce window: nothing changed.
    Debounced,
    /// Outside the window: the press was recorded, a refresh was requested, and this is
    /// the digit now (unchanged if it was already at a bound).
    Accepted(Digit),
}

/// Single-slot refresh request carrying the digit to draw. A newer request replaces an
/// unconsumed one.
pub type RefreshSignal = Signal<CriticalSectionRawMutex, Digit>;

#[derive(Clone, Copy, Debug)]
struct InputState {
    digit: Digit,
    last_press: Option<Instant>,
}

/// Owns the digit, the debounce timestamp, and the refresh request.
///
/// Edge handlers call [`on_edge`](Self::on_edge); the main loop consumes refresh requests with
/// [`take_refresh`](Self::take_refresh). Every access runs in a critical section, so it can
/// be shared as a `static` between the button tasks and the main loop.
///
/// The debounce timestamp is shared by both buttons: a press on one button within
/// [`DEBOUNCE_WINDOW`] of an accepted press on the other is ignored too.
///
/// ```
/// use digit_matrix::{Digit, EdgeOutcome, InputController, Line};
/// use embassy_time::Instant;
///
/// static INPUT: InputController = InputController::new(Digit::MIN);
///
/// let outcome = INPUT.on_edge(Line::Increment, Instant::from_micros(0));
/// assert_eq!(outcome, EdgeOutcome::Accepted(Digit::new(1)?));
///
/// // 100 ms later is contact bounce.
/// let outcome = INPUT.on_edge(Line::Increment, Instant::from_micros(100_000));
/// assert_eq!(outcome, EdgeOutcome::Debounced);
///
/// assert_eq!(INPUT.take_refresh(), Some(Digit::new(1)?));
/// # Ok::<(), digit_matrix::Error>(())
/// ```
pub struct InputController {
    state: Mutex<CriticalSectionRawMutex, Cell<InputState>>,
    refresh: RefreshSignal,
}

impl InputController {
    /// Starts at `digit` with no press recorded, so the first edge is always accepted.
    #[must_use]
    pub const fn new(digit: Digit) -> Self {
        Self {
            state: Mutex::new(Cell::new(InputState {
                digit,
                last_press: None,
            })),
            refresh: Signal::new(),
        }
    }

    /// Handles a falling edge on `line` seen at `timestamp`.
    ///
    /// An edge no more than [`DEBOUNCE_WINDOW`] after the last accepted one (on either line)
    /// changes nothing. Otherwise the press time is recorded, the digit steps up or down
    /// (saturating at 0 and 9), and a refresh is requested even if the digit was already at
    /// a bound.
    pub fn on_edge(&self, line: Line, timestamp: Instant) -> EdgeOutcome {
        let outcome = self.state.lock(|cell| {
            let mut state = cell.get();
            if let Some(last_press) = state.last_press {
                if timestamp.saturating_duration_since(last_press) <= DEBOUNCE_WINDOW {
                    return EdgeOutcome::Debounced;
                }
            }
            state.last_press = Some(timestamp);
            state.digit = match line {
                Line::Increment => state.digit.saturating_increment(),
                Line::Decrement => state.digit.saturating_decrement(),
            };
            cell.set(state);
            self.refresh.signal(state.digit);
            EdgeOutcome::Accepted(state.digit)
        });

        match outcome {
            EdgeOutcome::Accepted(digit) => info!("{:?} press: digit {}", line, digit),
            EdgeOutcome::Debounced => debug!("{:?} press ignored as bounce", line),
        }
        outcome
    }

    /// The digit as of the last accepted edge.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.state.lock(|cell| cell.get().digit)
    }

    /// When the last edge was accepted, if any.
    #[must_use]
    pub fn last_press(&self) -> Option<Instant> {
        self.state.lock(|cell| cell.get().last_press)
    }

    /// Whether a refresh is waiting to be consumed.
    #[must_use]
    pub fn refresh_requested(&self) -> bool {
        self.refresh.signaled()
    }

    /// Consumes the pending refresh request, if any, returning the digit to draw.
    #[must_use]
    pub fn take_refresh(&self) -> Option<Digit> {
        self.refresh.try_take()
    }

    /// Waits for the next refresh request and consumes it.
    pub async fn wait_refresh(&self) -> Digit {
        self.refresh.wait().await
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(Digit::MIN)
    }
}
