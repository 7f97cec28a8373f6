//! # Blog Credential Core - Rocket Adapter
//!
//! Request guards that run the authentication gate once per request and hand
//! route handlers an authenticated identity.
//!
//! ```rust,ignore
//! use blog_server::{Authenticated, attach_context};
//! use blog_domain::value_objects::Permission;
//! use rocket::http::Status;
//!
//! #[rocket::post("/articles")]
//! fn create_article(user: Authenticated) -> Result<&'static str, Status> {
//!     user.require(Permission::ArticleCreate)?;
//!     Ok("created")
//! }
//!
//! let context = blog_infrastructure::init_auth(config)?;
//! let rocket = attach_context(rocket::build(), &context)
//!     .mount("/", rocket::routes![create_article]);
//! ```
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Authenticated`] | Guard that fails with 401 unless the gate authenticates |
//! | [`MaybeAuthenticated`] | Guard that never fails; identity is optional |
//! | [`ApiErrorResponse`] | JSON body and status for domain errors |

pub mod auth;
pub mod builder;
pub mod constants;
pub mod error;

pub use auth::{Authenticated, AuthError, MaybeAuthenticated};
pub use builder::{attach_authentication, attach_context};
pub use error::ApiErrorResponse;
