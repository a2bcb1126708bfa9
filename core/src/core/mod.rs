pub mod bus;
pub mod memory;

pub use bus::{Bus, InterruptLines};
pub use memory::{AddressSpace, MemoryMapped, Ram, Rom};
