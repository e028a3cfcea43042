mod common;

pub use common::{at, mk_settings};
pub use memory_host::{Call, MemoryHost, Step};
