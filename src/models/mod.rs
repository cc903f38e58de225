pub mod todo;
pub mod user;

pub use todo::{NewTodoRequest, Todo, UpdateTodoRequest};
pub use user::{Credentials, LoginResponse, MessageResponse};
