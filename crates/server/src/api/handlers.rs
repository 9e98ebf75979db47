mod metadata;

pub use self::metadata::*;
