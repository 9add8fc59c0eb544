use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::middleware::JsonResponse;
use crate::params::{AddPhraseBody, AddPhraseParams};
use crate::usecases::{AddPhraseRequest, AddPhraseUseCase};

/// POST /api/phrases/{french,english} - Add or update phrases
///
/// An object body answers with one phrase, an array body with an array in
/// the same order.
pub async fn post(
    State(use_case): State<AddPhraseUseCase>,
    params: AddPhraseParams,
) -> Result<Response, ApiError> {
    match params.body {
        AddPhraseBody::Single(item) => {
            let phrase = use_case.execute_single(params.user_uuid, &item).await?;
            Ok(JsonResponse::ok(phrase).into_response())
        }
        AddPhraseBody::Batch(phrases) => {
            tracing::debug!("Saving batch of {} phrases for {}", phrases.len(), params.user_uuid);
            let saved = use_case
                .execute(AddPhraseRequest {
                    user_uuid: params.user_uuid,
                    phrases,
                })
                .await?;
            Ok(JsonResponse::ok(saved).into_response())
        }
    }
}
