pub mod attack_path;
pub mod bundle;
pub mod lenient;
pub mod records;

pub use attack_path::*;
pub use bundle::*;
pub use records::*;
