pub mod http_requester;
pub mod types;

pub use http_requester::HttpRequester;
pub use types::{ApiRequest, ApiResponse, Executor, Method, RequestError};
