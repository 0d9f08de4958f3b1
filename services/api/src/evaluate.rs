use clap::Args;
use registration_docs::config::{load_policy_file, AppConfig};
use registration_docs::error::AppError;
use registration_docs::workflows::registration::documents::EvaluationRequest;
use registration_docs::workflows::registration::{evaluate, DocumentEvaluation, PolicyConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding `context`, optional `policy` overrides and `submission`
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Baseline policy JSON (defaults to REGISTRATION_POLICY_FILE or built-in defaults)
    #[arg(long)]
    pub(crate) policy: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        request,
        policy,
        pretty,
    } = args;

    let base_policy = match policy {
        Some(path) => load_policy_file(&path)?,
        None => AppConfig::load()?.policy,
    };

    let raw = fs::read_to_string(&request)?;
    let evaluation = evaluate_request(&raw, &base_policy)?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&evaluation)?
    } else {
        serde_json::to_string(&evaluation)?
    };
    println!("{rendered}");

    Ok(())
}

pub(crate) fn evaluate_request(
    raw: &str,
    base_policy: &PolicyConfig,
) -> Result<DocumentEvaluation, AppError> {
    let request: EvaluationRequest = serde_json::from_str(raw)?;
    let policy = base_policy.with_overrides(&request.policy);
    Ok(evaluate(&request.context, &policy, &request.submission))
}
