//! Small pure helpers shared by the versioning policy.

pub mod hash;
pub mod path;
pub mod url;
