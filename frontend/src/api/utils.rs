use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::Storage;

/// Local storage key holding the admin session id
pub const SESSION_STORAGE_KEY: &str = "session_id";

/// Creates a GET request with the Authorization header taken from localStorage
pub fn authenticated_get(url: &str) -> RequestBuilder {
    let req = Request::get(url);

    match gloo_storage::LocalStorage::get::<String>(SESSION_STORAGE_KEY) {
        Ok(session_id) => req.header("Authorization", &bearer(&session_id)),
        // No session stored, the endpoint answers 401 and the provider reports it
        Err(_) => req,
    }
}

fn bearer(session_id: &str) -> String {
    format!("Bearer {}", session_id)
}
