pub mod acquire;
pub mod actuate;
pub mod audio;
pub mod bump_irq;
pub mod manual_override;
pub mod master;
