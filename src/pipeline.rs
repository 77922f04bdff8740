//! Analysis pipeline orchestration
//!
//! One pipeline instance handles exactly one request: resolve resume text
//! (fresh upload or the user's stored copy), build the prompt, call the
//! completion provider, parse the reply. The client and store are injected
//! by the caller; the pipeline owns no global state.

use crate::error::{Result, AtsMatcherError};
use crate::input::InputManager;
use crate::llm::client::{CompletionClient, CompletionOptions};
use crate::llm::prompts::{PromptParams, PromptTemplates};
use crate::processing::response_parser::{AnalysisResult, ResponseParser};
use crate::store::ResumeStore;
use log::{debug, info, warn};

/// One analysis request from the presentation layer.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub job_description: String,
    /// A freshly uploaded resume; when absent, the user's stored resume
    /// is used instead.
    pub upload: Option<ResumeUpload>,
}

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Pipeline outcome handed back to the presentation layer.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    /// Set when saving the uploaded resume failed; the analysis itself
    /// still completed.
    pub persistence_warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    AwaitingInput,
    Extracting,
    Extracted,
    Prompting,
    Calling,
    Parsing,
    Complete,
    Failed,
}

pub struct AnalysisPipeline<C, S> {
    client: C,
    store: S,
    options: CompletionOptions,
    templates: PromptTemplates,
    parser: ResponseParser,
    input: InputManager,
    state: PipelineState,
}

impl<C: CompletionClient, S: ResumeStore> AnalysisPipeline<C, S> {
    pub fn new(client: C, store: S, options: CompletionOptions) -> Self {
        Self {
            client,
            store,
            options,
            templates: PromptTemplates::default(),
            parser: ResponseParser::new(),
            input: InputManager::new(),
            state: PipelineState::AwaitingInput,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the full analysis. A pipeline instance serves one request;
    /// invoking it again is an error.
    pub async fn run(&mut self, request: AnalysisRequest) -> Result<AnalysisReport> {
        if self.state != PipelineState::AwaitingInput {
            return Err(AtsMatcherError::InvalidInput(
                "Pipeline instance has already served a request".to_string(),
            ));
        }

        // Input checks happen before any state advances: a rejected request
        // leaves the machine awaiting input and never reaches the provider.
        if request.job_description.trim().is_empty() {
            return Err(AtsMatcherError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }

        let mut persistence_warning = None;

        let resume_text = match &request.upload {
            Some(upload) => {
                self.state = PipelineState::Extracting;
                let text = match self.input.extract_text(&upload.filename, &upload.bytes) {
                    Ok(text) => text,
                    Err(e) => {
                        self.state = PipelineState::Failed;
                        return Err(e);
                    }
                };
                self.state = PipelineState::Extracted;

                // A failed save degrades the last-resume convenience feature
                // but never aborts the analysis.
                if let Err(e) = self.store.save(&request.user_id, &text).await {
                    warn!("Failed to persist resume for {}: {}", request.user_id, e);
                    persistence_warning = Some(format!("Resume was analyzed but not saved: {}", e));
                } else {
                    info!("Stored resume for user {}", request.user_id);
                }
                text
            }
            None => match self.store.load(&request.user_id).await {
                Ok(Some(text)) => {
                    info!("Reusing stored resume for user {}", request.user_id);
                    text
                }
                Ok(None) => {
                    return Err(AtsMatcherError::InvalidInput(format!(
                        "No stored resume for user {}; upload one first",
                        request.user_id
                    )));
                }
                Err(e) => {
                    self.state = PipelineState::Failed;
                    return Err(e);
                }
            },
        };

        self.state = PipelineState::Prompting;
        let prompt = self.templates.render_match_analysis(&PromptParams {
            resume_content: resume_text,
            job_content: request.job_description.clone(),
        });
        debug!("Built analysis prompt ({} chars)", prompt.len());

        self.state = PipelineState::Calling;
        let response = match self.client.complete(&prompt, &self.options).await {
            Ok(response) => response,
            Err(e) => {
                self.state = PipelineState::Failed;
                return Err(e);
            }
        };

        self.state = PipelineState::Parsing;
        let result = self.parser.parse(&response);
        info!(
            "Analysis complete: score={:?}, {} qualification rows",
            result.ats_score,
            result.qualifications.len()
        );

        self.state = PipelineState::Complete;
        Ok(AnalysisReport {
            result,
            persistence_warning,
        })
    }
}
