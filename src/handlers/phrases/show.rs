use axum::extract::State;

use crate::middleware::{ApiResult, JsonResponse};
use crate::params::ShowPhrasesParams;
use crate::usecases::{PhrasesResponse, ShowPhrasesRequest, ShowPhrasesUseCase};

/// GET /api/phrases/{french,english} - List the caller's phrases
pub async fn get(
    State(use_case): State<ShowPhrasesUseCase>,
    params: ShowPhrasesParams,
) -> ApiResult<PhrasesResponse> {
    let phrases = use_case
        .execute(ShowPhrasesRequest {
            user_uuid: params.user_uuid,
        })
        .await?;

    Ok(JsonResponse::ok(phrases))
}
