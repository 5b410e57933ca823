use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::application::ports::{AuthError, SessionUser};
use crate::application::services::{
    FileOutput, GenerationError, GenerationOutput, GenerationRequest, StreamOutput,
};
use crate::domain::{AudioUpload, GenerationMode, OutputKind, TargetLanguage};
use crate::presentation::state::AppState;

const ACCESS_TOKEN_COOKIE: &str = "ACCESS_TOKEN";

pub const SOURCE_TEXT_HEADER: &str = "x-source-text";
pub const TRANSLATED_TEXT_HEADER: &str = "x-translated-text";
pub const BACK_TRANSLATED_TEXT_HEADER: &str = "x-back-translated-text";

#[derive(Serialize)]
pub struct GenerateResponse {
    pub status: String,
    pub source_text: String,
    pub translated_text: String,
    pub back_translated_text: String,
    pub target_lang: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Single pipeline entry point. Validates the session cookie, parses the
/// multipart form, runs the generation pipeline and assembles either the
/// JSON file-result or the streaming audio response.
#[tracing::instrument(skip(state, headers, multipart))]
pub async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let user = match authenticate(&state, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let request = match parse_form(multipart).await {
        Ok(request) => request,
        Err(message) => {
            tracing::warn!(error = %message, "Rejecting malformed generation request");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    tracing::info!(
        user_id = %user.user_id,
        mode = ?request.mode,
        target_lang = %request.target_lang,
        domain = %request.domain_code,
        output = ?request.output,
        "Generation request accepted"
    );

    match state.generation_service.generate(&user, request).await {
        Ok(GenerationOutput::File(output)) => file_response(output),
        Ok(GenerationOutput::Stream(output)) => stream_response(output),
        Err(GenerationError::BadRequest(message)) => {
            tracing::warn!(user_id = %user.user_id, error = %message, "Generation rejected");
            error_response(StatusCode::BAD_REQUEST, message)
        }
        Err(e) => {
            tracing::error!(user_id = %user.user_id, error = %e, "Generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<SessionUser, Response> {
    let token = match access_token(headers) {
        Some(token) => token,
        None => {
            tracing::warn!("Request without session cookie");
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                AuthError::MissingCredential.to_string(),
            ));
        }
    };

    match state.session_validator.validate(&token).await {
        Ok(user) => Ok(user),
        Err(AuthError::Unreachable(e)) => {
            tracing::error!(error = %e, "Auth server unreachable");
            Err(error_response(
                StatusCode::BAD_GATEWAY,
                "auth server unreachable".to_string(),
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session validation failed");
            Err(error_response(StatusCode::UNAUTHORIZED, e.to_string()))
        }
    }
}

fn access_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == ACCESS_TOKEN_COOKIE).then(|| value.to_string())
        })
        .next()
}

async fn parse_form(mut multipart: Multipart) -> Result<GenerationRequest, String> {
    let mut mode = None;
    let mut target_lang = None;
    let mut domain_code = "none".to_string();
    let mut output = OutputKind::default();
    let mut text = None;
    let mut audio = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("failed to read multipart form: {}", e))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "mode" => {
                let value = read_text(field, &name).await?;
                mode = Some(
                    GenerationMode::parse(&value).ok_or_else(|| format!("unknown mode: {}", value))?,
                );
            }
            "target_lang" => {
                target_lang = Some(TargetLanguage::new(read_text(field, &name).await?));
            }
            "domain" => {
                domain_code = read_text(field, &name).await?;
            }
            "output" => {
                let value = read_text(field, &name).await?;
                output = OutputKind::parse(&value)
                    .ok_or_else(|| format!("unknown output kind: {}", value))?;
            }
            "text" => {
                text = Some(read_text(field, &name).await?);
            }
            "audio" => {
                let filename = field.file_name().unwrap_or("recording.webm").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("failed to read audio field: {}", e))?;
                audio = Some(AudioUpload { filename, data });
            }
            _ => {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    Ok(GenerationRequest {
        mode: mode.ok_or("missing form field: mode")?,
        target_lang: target_lang.ok_or("missing form field: target_lang")?,
        domain_code,
        output,
        text,
        audio,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, String> {
    field
        .text()
        .await
        .map_err(|e| format!("failed to read field {}: {}", name, e))
}

fn file_response(output: FileOutput) -> Response {
    (
        StatusCode::OK,
        Json(GenerateResponse {
            status: "success".to_string(),
            source_text: output.source_text,
            translated_text: output.translated_text,
            back_translated_text: output.back_translated_text,
            target_lang: output.target_lang,
            audio_url: output.audio_url,
        }),
    )
        .into_response()
}

/// Audio goes in the body; the textual artifacts ride in headers,
/// percent-encoded because they are usually non-ASCII.
fn stream_response(output: StreamOutput) -> Response {
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(SOURCE_TEXT_HEADER, escape_header(&output.source_text))
        .header(
            TRANSLATED_TEXT_HEADER,
            escape_header(&output.translated_text),
        )
        .header(
            BACK_TRANSLATED_TEXT_HEADER,
            escape_header(&output.back_translated_text),
        );

    if let Some(headers) = response.headers_mut() {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        );
    }

    response
        .body(Body::from_stream(output.chunks))
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build streaming response");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to build streaming response".to_string(),
            )
        })
}

fn escape_header(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}
