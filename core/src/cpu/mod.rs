pub mod mc6809;

pub use mc6809::{CcFlag, CpuFault, Mc6809, Mc6809State};
