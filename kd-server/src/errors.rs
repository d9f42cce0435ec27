use kd_core::prelude::*;
use rocket::Responder;
use tracing::*;

#[derive(Debug, Responder)]
pub enum ApiError {
    #[response(status = 400)]
    BadRequest(String),

    #[response(status = 404)]
    NotFound(String),

    #[response(status = 500)]
    Internal(String),

    #[response(status = 502)]
    BadGateway(String),

    #[response(status = 503)]
    Unavailable(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast_ref::<ResourceError>() {
            Some(ResourceError::Validation(_)) => Self::BadRequest(format!("{e}")),
            Some(ResourceError::NotFound(_)) => Self::NotFound(format!("{e}")),
            Some(ResourceError::Decode(_)) => Self::BadGateway(format!("{e}")),
            Some(ResourceError::Transport(_)) => Self::Unavailable(format!("{e}")),
            None => Self::Internal(format!("kdash error: {e}")),
        }
    }
}

// anyhow::Error Debug implementation prints the entire chain of errors, but once this gets
// sucked up into rocket it no longer knows anything about that, so here we print the full
// error first before returning the result.
pub fn respond<T>(res: anyhow::Result<T>) -> Result<T, ApiError> {
    if let Err(e) = res.as_ref() {
        match e.downcast_ref::<ResourceError>() {
            Some(ResourceError::Validation(_) | ResourceError::NotFound(_)) => warn!("{e:?}"),
            _ => error!("{e:?}"),
        }
    }
    res.map_err(|e| e.into())
}
