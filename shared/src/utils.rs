use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};

pub fn redirect_response(location: &str) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", location)
        .body("".to_string())
        .map_err(Box::new)?;

    Ok(response)
}

pub fn text_response(status: &StatusCode, body: &str) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status.as_u16())
        .body(body.to_string())
        .map_err(Box::new)?;

    Ok(response)
}

/// Relays an upstream payload without reshaping it.
pub fn api_response(status: &StatusCode, body: &str) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status.as_u16())
        .header("content-type", "application/json")
        .body(body.to_string())
        .map_err(Box::new)?;

    Ok(response)
}

pub fn not_implemented_response() -> Result<Response<String>, Error> {
    let status = StatusCode::NOT_IMPLEMENTED;
    text_response(&status, status.canonical_reason().unwrap_or_default())
}
