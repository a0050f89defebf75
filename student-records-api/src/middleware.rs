pub mod auth;
pub mod ethos;

pub use auth::{auth_middleware, Caller, Claims};
pub use ethos::ethos_response_middleware;
