//! Unified error types using thiserror

use actix_web::{ HttpResponse, ResponseError, http::{ StatusCode, header::ContentType } };
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
  #[error("IO error: {0}")] Io(#[from] std::io::Error),
  #[error("Template error: {0}")] Template(#[from] handlebars::TemplateError),
  #[error("Render error: {0}")] Render(#[from] handlebars::RenderError),
  #[error("Config error: {0}")] Config(#[from] config::ConfigError),
  #[error("Reverse for '{0}' not found")] NoReverseMatch(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Io(e) =>
        match e.kind() {
          std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
          std::io::ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
          std::io::ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
          _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
      AppError::NoReverseMatch(_) => StatusCode::NOT_FOUND,
      AppError::Template(_) | AppError::Render(_) | AppError::Config(_) =>
        StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    warn!("{self}");
    HttpResponse::build(self.status_code()).insert_header(ContentType::plaintext()).body(self.to_string())
  }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
