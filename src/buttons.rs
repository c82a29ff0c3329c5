//! Button edge tasks: one per button, feeding the [`InputController`].

use embassy_executor::Spawner;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::{InputController, Line, Result};

/// Spawns one edge task per button.
///
/// # Errors
///
/// Returns [`Error::TaskSpawn`](crate::Error::TaskSpawn) if a task cannot be spawned.
pub fn spawn_edge_tasks(
    spawner: Spawner,
    increment_button: Input<'static>,
    decrement_button: Input<'static>,
    input: &'static InputController,
) -> Result<()> {
    spawner.spawn(edge_task(increment_button, Line::Increment, input))?;
    spawner.spawn(edge_task(decrement_button, Line::Decrement, input))?;
    Ok(())
}

/// Reports every falling edge on `button` to `input`, stamped with the time it was seen.
///
/// Edges are passed on raw; [`InputController::on_edge`] does the debouncing.
#[embassy_executor::task(pool_size = 2)]
async fn edge_task(
    mut button: Input<'static>,
    line: Line,
    input: &'static InputController,
) -> ! {
    loop {
        button.wait_for_falling_edge().await;
        input.on_edge(line, Instant::now());
    }
}
