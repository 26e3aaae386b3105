pub mod district;
pub mod state;
pub mod user;

pub use district::{District, DistrictInput};
pub use state::{State, StateStats};
pub use user::User;
