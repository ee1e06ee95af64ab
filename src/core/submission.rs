use crate::core::form::FormState;
use crate::domain::model::{AnalysisResult, Payload};
use crate::domain::ports::{WebhookResponse, WebhookTransport};
use crate::utils::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A payload tagged with the sequence number it was issued under.
#[derive(Debug)]
pub struct Submission {
    sequence: u64,
    payload: Payload,
}

/// Outcome of one webhook round trip, still tagged with its sequence number.
#[derive(Debug)]
pub struct Completion {
    sequence: u64,
    outcome: Result<AnalysisResult>,
}

impl Submission {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Performs the single POST for this submission. Never retried.
    pub async fn send<T>(self, transport: &T, endpoint: &str) -> Completion
    where
        T: WebhookTransport + ?Sized,
    {
        tracing::info!(
            "📤 Submitting {} (#{})",
            self.payload.describe(),
            self.sequence
        );
        tracing::debug!("POST {}", endpoint);

        let outcome = match transport.post_json(endpoint, &self.payload).await {
            Ok(response) => interpret_response(&response),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(result) => tracing::info!(
                "📥 Response for #{} received (success: {})",
                self.sequence,
                result.success
            ),
            Err(e) => tracing::warn!("Submission #{} failed: {}", self.sequence, e),
        }

        Completion {
            sequence: self.sequence,
            outcome,
        }
    }
}

impl Completion {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn outcome(&self) -> &Result<AnalysisResult> {
        &self.outcome
    }
}

/// Maps a raw webhook reply to an `AnalysisResult`.
pub fn interpret_response(response: &WebhookResponse) -> Result<AnalysisResult> {
    if !response.is_success() {
        return Err(AppError::HttpStatusError {
            status: response.status,
        });
    }

    let body: serde_json::Value = serde_json::from_slice(&response.body)?;
    parse_analysis_result(body)
}

/// Checks a JSON document against the `AnalysisResult` shape.
pub fn parse_analysis_result(body: serde_json::Value) -> Result<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_value(body).map_err(|e| AppError::response_shape(e.to_string()))?;

    if result.success {
        if result.analysis.is_none() {
            return Err(AppError::response_shape(
                "missing field `analysis` in a successful response",
            ));
        }
        if result.seo_content.is_none() {
            return Err(AppError::response_shape(
                "missing field `seoContent` in a successful response",
            ));
        }
    }

    Ok(result)
}

/// Submission lifecycle: one result slot, one error slot, and a sequence
/// counter so only the newest submission may write to them.
#[derive(Debug, Default)]
pub struct SubmissionPipeline {
    state: SubmissionState,
    sequence: u64,
    result: Option<AnalysisResult>,
    error: Option<AppError>,
}

impl SubmissionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(AppError::user_friendly_message)
    }

    /// Moves the error out of its slot.
    pub fn take_error(&mut self) -> Option<AppError> {
        self.error.take()
    }

    /// Enters `Submitting`, clears both slots and builds the payload.
    ///
    /// Returns `None` when the form has nothing to send; the pipeline is then
    /// already `Failed` with a validation error.
    pub fn begin(&mut self, form: &mut FormState) -> Option<Submission> {
        self.sequence += 1;
        self.state = SubmissionState::Submitting;
        self.result = None;
        self.error = None;
        form.clear_error();

        match form.build_payload() {
            Ok(payload) => Some(Submission {
                sequence: self.sequence,
                payload,
            }),
            Err(e) => {
                tracing::debug!("Submission #{} not sent: {}", self.sequence, e);
                self.state = SubmissionState::Failed;
                self.error = Some(e);
                None
            }
        }
    }

    /// Applies `completion` if it belongs to the latest submission.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.sequence != self.sequence {
            tracing::warn!(
                "Discarding stale response for #{} (latest is #{})",
                completion.sequence,
                self.sequence
            );
            return false;
        }

        match completion.outcome {
            Ok(result) => {
                self.result = Some(result);
                self.state = SubmissionState::Succeeded;
            }
            Err(e) => {
                self.error = Some(e);
                self.state = SubmissionState::Failed;
            }
        }
        true
    }

    pub async fn submit<T>(
        &mut self,
        form: &mut FormState,
        transport: &T,
        endpoint: &str,
    ) -> SubmissionState
    where
        T: WebhookTransport + ?Sized,
    {
        if let Some(submission) = self.begin(form) {
            let completion = submission.send(transport, endpoint).await;
            self.complete(completion);
        }
        self.state
    }
}
