//! End-to-end wizard flow tests
//!
//! Drives the controller and generator together the way the TUI runner
//! does, with a scripted LLM client standing in for the backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use assesscraft::config::LlmConfig;
use assesscraft::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError};
use assesscraft::wizard::{
    GenerationJob, GenerationOutcome, Generator, Selections, SelectionsUpdate, WizardController, WizardPhase,
};

/// Scripted LLM client returning canned responses in order
struct ScriptedClient {
    responses: Vec<Result<CompletionResponse, String>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<CompletionResponse, String>>) -> Self {
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    fn with_texts(texts: Vec<&str>) -> Self {
        Self::new(texts.into_iter().map(|t| Ok(CompletionResponse::text(t))).collect())
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let idx = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            Some(Ok(resp)) => Ok(resp.clone()),
            Some(Err(msg)) => Err(LlmError::InvalidResponse(msg.clone())),
            None => Err(LlmError::InvalidResponse("script exhausted".to_string())),
        }
    }
}

fn collect_inputs(controller: &mut WizardController) {
    controller.update_selections(SelectionsUpdate::field("Mechanical Engineering"));
    controller.advance();
    controller.update_selections(SelectionsUpdate::level("Undergraduate"));
    controller.advance();
    controller.update_selections(SelectionsUpdate::outcomes([
        "Analyze stress in mechanical components".to_string(),
        "Design a thermal management system".to_string(),
        String::new(),
    ]));
}

/// Run a job against the generator and feed the result back, the way the
/// TUI runner's tick handler does.
async fn run_job(controller: &mut WizardController, generator: &Generator, job: GenerationJob) {
    match job {
        GenerationJob::Options { selections } => {
            let result = generator.propose_assessment_types(&selections).await;
            controller.complete_options(result);
        }
        GenerationJob::Plan {
            selections,
            assessment_type,
        } => {
            let result = generator.produce_detailed_plan(&selections, &assessment_type).await;
            controller.complete_plan(result);
        }
    }
}

#[tokio::test]
async fn full_flow_reaches_plan() {
    let client = Arc::new(ScriptedClient::with_texts(vec![
        "Design Portfolio\nPeer Review\nIndustry Case Study",
        "Objective: assemble a portfolio of design work.\nDeliverables: three artefacts.",
    ]));
    let generator = Generator::new(client.clone(), &LlmConfig::default());
    let mut controller = WizardController::new();

    collect_inputs(&mut controller);
    assert_eq!(controller.phase(), WizardPhase::CollectingOutcomes);

    let job = controller.request_assessment_options().expect("options job");
    run_job(&mut controller, &generator, job).await;

    assert_eq!(controller.phase(), WizardPhase::PresentingOptions);
    assert_eq!(
        controller.options(),
        ["Design Portfolio", "Peer Review", "Industry Case Study"]
    );

    let job = controller.request_detailed_plan("Peer Review").expect("plan job");
    run_job(&mut controller, &generator, job).await;

    assert_eq!(controller.phase(), WizardPhase::PresentingPlan);
    let plan = controller.plan().expect("plan stored");
    assert_eq!(plan.title(), "Peer Review");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn failed_options_generation_retries_in_place() {
    let client = Arc::new(ScriptedClient::new(vec![
        Err("backend unavailable".to_string()),
        Ok(CompletionResponse::text("Design Portfolio\nPeer Review")),
    ]));
    let generator = Generator::new(client.clone(), &LlmConfig::default());
    let mut controller = WizardController::new();

    collect_inputs(&mut controller);
    let job = controller.request_assessment_options().expect("options job");
    run_job(&mut controller, &generator, job).await;

    // Failure keeps the phase and surfaces the error
    assert_eq!(controller.phase(), WizardPhase::CollectingOutcomes);
    assert!(matches!(controller.outcome(), GenerationOutcome::Failed(_)));

    // Retry with identical inputs succeeds and advances
    let job = controller.retry_current().expect("retry job");
    run_job(&mut controller, &generator, job).await;

    assert_eq!(controller.phase(), WizardPhase::PresentingOptions);
    assert_eq!(controller.options(), ["Design Portfolio", "Peer Review"]);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn failed_plan_generation_keeps_options_and_choice() {
    let client = Arc::new(ScriptedClient::new(vec![
        Ok(CompletionResponse::text("Design Portfolio\nPeer Review")),
        Err("backend unavailable".to_string()),
        Ok(CompletionResponse::text("Objective: review peers.")),
    ]));
    let generator = Generator::new(client.clone(), &LlmConfig::default());
    let mut controller = WizardController::new();

    collect_inputs(&mut controller);
    let job = controller.request_assessment_options().expect("options job");
    run_job(&mut controller, &generator, job).await;

    let job = controller.request_detailed_plan("Peer Review").expect("plan job");
    run_job(&mut controller, &generator, job).await;

    // Options and the chosen type survive the failure
    assert_eq!(controller.phase(), WizardPhase::PresentingOptions);
    assert_eq!(controller.options(), ["Design Portfolio", "Peer Review"]);
    assert_eq!(controller.chosen(), Some("Peer Review"));

    let job = controller.retry_current().expect("retry job");
    run_job(&mut controller, &generator, job).await;

    assert_eq!(controller.phase(), WizardPhase::PresentingPlan);
    assert_eq!(controller.plan().map(|p| p.title()), Some("Peer Review"));
}

#[tokio::test]
async fn in_flight_request_is_not_duplicated() {
    let client = Arc::new(ScriptedClient::with_texts(vec!["Design Portfolio"]));
    let generator = Generator::new(client.clone(), &LlmConfig::default());
    let mut controller = WizardController::new();

    collect_inputs(&mut controller);
    let job = controller.request_assessment_options().expect("options job");

    // A second request before completion returns no job
    assert!(controller.request_assessment_options().is_none());

    run_job(&mut controller, &generator, job).await;
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn restart_clears_session_state() {
    let client = Arc::new(ScriptedClient::with_texts(vec!["Design Portfolio", "Objective: ..."]));
    let generator = Generator::new(client, &LlmConfig::default());
    let mut controller = WizardController::new();

    collect_inputs(&mut controller);
    let job = controller.request_assessment_options().expect("options job");
    run_job(&mut controller, &generator, job).await;
    let job = controller.request_detailed_plan("Design Portfolio").expect("plan job");
    run_job(&mut controller, &generator, job).await;

    controller.reset_all();

    assert_eq!(controller.phase(), WizardPhase::CollectingField);
    assert_eq!(*controller.selections(), Selections::new());
    assert!(controller.options().is_empty());
    assert!(controller.plan().is_none());
    assert!(controller.chosen().is_none());
}
