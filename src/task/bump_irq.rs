//! Bump Interrupt Task
//!
//! Stands in for the bump interrupt service routine. It runs on the high priority interrupt
//! executor and is woken directly from the GPIO bank interrupt, so it preempts every task on the
//! thread executor and never blocks between edges.

use bumper_core::task::irq;
use defmt::info;

use crate::system::hardware::{EdgeLatch, ARMED_INPUTS};
use crate::system::state::SHARED;

#[embassy_executor::task]
pub async fn bump_irq() {
    // only interrupt-driven mode ever arms the inputs
    let mut inputs = ARMED_INPUTS.wait().await;
    info!("Bump edge handler active");

    loop {
        let fired = inputs.wait_for_bump().await;
        irq::on_bump_interrupt(&SHARED, &mut EdgeLatch::new(&inputs, fired));
    }
}
