use kd_core::errors::ResourceError;

use super::*;
use crate::errors::respond;

#[rstest]
#[case::validation(ResourceError::validation("bad"), 400)]
#[case::not_found(ResourceError::not_found("gone"), 404)]
#[case::decode(ResourceError::decode("garbled"), 502)]
#[case::transport(ResourceError::transport("down"), 503)]
#[case::other(anyhow::anyhow!("whoops"), 500)]
#[traced_test]
fn test_api_error_status(#[case] err: anyhow::Error, #[case] status: u16) {
    let api_err = respond::<()>(Err(err)).unwrap_err();
    let code = match api_err {
        ApiError::BadRequest(_) => 400,
        ApiError::NotFound(_) => 404,
        ApiError::Internal(_) => 500,
        ApiError::BadGateway(_) => 502,
        ApiError::Unavailable(_) => 503,
    };
    assert_eq!(code, status);
}

#[rstest]
fn test_respond_ok() {
    assert_ok_eq_x!(respond(Ok(42)), 42);
}
