mod resume;

pub use resume::*;
