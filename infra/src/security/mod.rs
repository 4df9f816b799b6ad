//! Hashing implementations

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptHasher;
