// handlers/public/auth/mod.rs - Token acquisition
//
// Login is the only way to obtain a token. There is no registration,
// refresh or logout endpoint; users are seeded with `add-user`.

pub mod login;

pub use login::login;
