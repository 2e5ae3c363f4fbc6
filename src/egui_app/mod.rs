//! egui Native Desktop App Module
//!
//! The users desk client: a form-driven editor for the remote `users`
//! collection.
//!
//! # Architecture
//!
//! - **`config`** - Where the users service lives
//! - **`users_api`** - The remote users resource (`UserService`, `HttpUserService`)
//! - **`state`** - The user collection store and the app state around it
//! - **`search`** - The search term and its predicate
//! - **`views`** / **`theme`** - Rendering
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Application entry point
//! ├── config.rs     - Configuration management
//! ├── users_api.rs  - Users HTTP client
//! ├── search.rs     - Search filter
//! ├── state/        - Users store, reducer, form draft, app state
//! ├── views/        - Panels, form, list, dialogs
//! └── theme/        - Colors and frames
//! ```

pub mod config;
pub mod users_api;
pub mod search;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use users_api::{HttpUserService, RemoteError, RemoteErrorKind, UserService};
pub use search::SearchFilter;
pub use state::{AppState, Submission, UserDraft, UsersAction, UsersOperation, UsersState, UsersStore};
