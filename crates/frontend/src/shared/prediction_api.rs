//! Client for the external prediction endpoint
//!
//! The service is consumed, never implemented, here. Transport failure,
//! an error payload and a malformed body are three distinct conditions the
//! prediction page shows differently; none of them is ever defaulted away.

use contracts::prediction::{PredictionRequest, PredictionResponse, PREDICTION_ENDPOINT};
use contracts::shared::errors::PredictionError;
use gloo_net::http::Request;

pub async fn request_prediction(
    request: &PredictionRequest,
) -> Result<PredictionResponse, PredictionError> {
    let response = Request::post(PREDICTION_ENDPOINT)
        .json(request)
        .map_err(|err| PredictionError::Unreachable(err.to_string()))?
        .send()
        .await
        .map_err(|err| {
            log::error!("prediction request failed: {err}");
            PredictionError::Unreachable(err.to_string())
        })?;

    if !response.ok() {
        let status = response.status();
        // The service reports failures as {"error": "..."} bodies.
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|value| value.as_str())
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => "unknown error".to_string(),
        };
        return Err(PredictionError::Service { status, message });
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|err| PredictionError::InvalidResponse(err.to_string()))
}
