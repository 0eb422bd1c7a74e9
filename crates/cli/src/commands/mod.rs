pub mod precise;
pub mod prompt;
pub mod scan;
pub mod util;

pub use precise::*;
pub use prompt::*;
pub use scan::*;
pub use util::*;
