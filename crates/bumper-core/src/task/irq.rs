//! Bump interrupt handler
//!
//! Runs in interrupt context on a falling edge of any bump line. Does three things, in this
//! order: captures the interrupt status, clears the hardware flag, gives the bump signal with
//! the captured status. It never blocks.

use crate::hal::InterruptPort;
use crate::system::signal::Give;
use crate::system::state::SharedState;

/// Handles one bump interrupt.
///
/// Returns what the give did, or `None` if no bump signal exists (polling mode, or an edge
/// before the mode was selected); such interrupts are cleared and dropped.
pub fn on_bump_interrupt<P: InterruptPort>(shared: &SharedState, port: &mut P) -> Option<Give> {
    let status = port.status();
    let Some(signal) = shared.signal() else {
        port.clear();
        return None;
    };

    port.clear();
    let give = signal.give_from_isr(status);
    trace!(
        "Bump irq {=u8:#b}, woke waiter: {}, coalesced: {}",
        status.bits(),
        give.woke_waiter,
        give.coalesced
    );
    Some(give)
}
