use axum::extract::State;

use crate::middleware::{ApiResult, JsonResponse};
use crate::params::UpdatePhraseParams;
use crate::usecases::{PhraseResponse, UpdatePhraseRequest, UpdatePhraseUseCase};

/// PUT /api/phrases/{french,english}/:uuid - Replace a phrase's content and translation
pub async fn put(
    State(use_case): State<UpdatePhraseUseCase>,
    params: UpdatePhraseParams,
) -> ApiResult<PhraseResponse> {
    let phrase = use_case
        .execute(UpdatePhraseRequest {
            uuid: params.phrase_uuid,
            user_uuid: params.user_uuid,
            content: params.content,
            translation: params.translation,
        })
        .await?;

    Ok(JsonResponse::ok(phrase))
}
