// API assertion harness
//
// One request in, one assertable response out. No retries: an
// unexpected status or body is a hard failure for the calling test.

mod client;
mod model;
mod response;

pub use client::ApiClient;
pub use model::{Comment, NewComment, NewPost, Post, UpdatedPost};
pub use response::ApiResponse;
