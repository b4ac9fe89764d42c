mod assistant;
mod middlewares;
mod progress;
mod users;
mod utils;

pub use assistant::assistant_routes;
pub use middlewares::auth as auth_middleware;
pub use progress::progress_routes;
pub use users::auth_routes;
