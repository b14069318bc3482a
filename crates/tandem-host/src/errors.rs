use reqwest::StatusCode;
use tandem_core::ClientError;

pub(crate) fn map_http_status(status: StatusCode, body: &str) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Auth(body.to_string()),
        _ => ClientError::Rejected {
            status: status.as_u16(),
            body: body.to_string(),
        },
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::Decode(err.to_string())
    } else {
        ClientError::Transport(err.to_string())
    }
}
