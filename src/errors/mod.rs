pub mod types;

pub use types::{AppError, AppResult, AuthError, PlaylistError, StoreError};
