use axum::{Json, async_trait, extract::FromRequest, http::Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{db::models::api::ErrorDetail, error::AppError};

pub mod profile;

/// 验证的 JSON 提取器
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation { message: "Invalid JSON format".to_string() })?;

        value.validate().map_err(|errors| {
            let error_details: Vec<ErrorDetail> = errors
                .field_errors()
                .iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |error| ErrorDetail {
                        field: Some(field.to_string()),
                        code: error.code.to_string(),
                        message: error.message.as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
                    })
                })
                .collect();

            AppError::Validation { message: format!("Validation failed with {} errors", error_details.len()) }
        })?;

        Ok(ValidatedJson(value))
    }
}
