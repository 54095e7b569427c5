//! Security primitives backing the domain's authentication seams.

pub mod password;

pub use password::BcryptPasswordHasher;
