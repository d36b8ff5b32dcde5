//! # Backend seam between the panel and the comment server
//!
//! [`CommentBackend`] is the only way the panel talks to the outside world.
//! Implementations live elsewhere: [`crate::MemoryBackend`] for tests, and the
//! HTTP backend in the `api` crate for the browser. The futures are not
//! required to be `Send`; the panel runs on a single-threaded event loop.
//!
//! | Method | Endpoint | Result |
//! |--------|----------|--------|
//! | [`fetch_comments`](CommentBackend::fetch_comments) | `GET /data?comments=<n>` | decoded comment records, in response order |
//! | [`delete_comments`](CommentBackend::delete_comments) | `POST /delete-data` | `Ok(())` only for a successful status |
//! | [`login_status`](CommentBackend::login_status) | `GET /login` | decoded [`LoginStatus`] |
//! | [`upload_url`](CommentBackend::upload_url) | `GET /image-upload-url` | the response body, untouched |

use std::future::Future;

use crate::error::PanelError;
use crate::models::{Comment, LoginStatus, MaxComments, UploadUrl};

pub trait CommentBackend {
    fn fetch_comments(
        &self,
        max: MaxComments,
    ) -> impl Future<Output = Result<Vec<Comment>, PanelError>>;

    fn delete_comments(&self) -> impl Future<Output = Result<(), PanelError>>;

    fn login_status(&self) -> impl Future<Output = Result<LoginStatus, PanelError>>;

    fn upload_url(&self) -> impl Future<Output = Result<UploadUrl, PanelError>>;
}
