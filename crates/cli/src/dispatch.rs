//! Command dispatch: turn a parsed CLI invocation into a search run.
//!
//! Every subcommand funnels into the same flow: resolve an SPL query and
//! a framing question, run the search job end to end, then have the
//! advisor summarize the rows for the operator.

use anyhow::Context;
use sentinel_advisor::AdvisorClient;
use sentinel_client::SplunkClient;
use sentinel_config::Config;
use tracing::info;

use crate::args::{Cli, Commands};
use crate::canned;
use crate::output;

pub async fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let mut splunk = SplunkClient::builder().from_config(config).build()?;
    let advisor = AdvisorClient::new(
        config.advisor.api_key.clone(),
        config.advisor.model.clone(),
    );

    let (question, spl_query) = match &cli.command {
        Commands::FailedLogins { window } => {
            let window =
                canned::parse_window(window.as_deref(), canned::FAILED_LOGINS_DEFAULT_WINDOW);
            (
                format!("Investigate failed logins in the last {window}."),
                canned::failed_logins_spl(&window),
            )
        }
        Commands::Errors { window } => {
            let window = canned::parse_window(window.as_deref(), canned::ERRORS_DEFAULT_WINDOW);
            (
                format!("Summarize critical errors in the last {window}."),
                canned::errors_spl(&window),
            )
        }
        Commands::SuspiciousProcess { window } => {
            let window = canned::parse_window(
                window.as_deref(),
                canned::SUSPICIOUS_PROCESS_DEFAULT_WINDOW,
            );
            (
                format!("Check suspicious process activity in the last {window}."),
                canned::suspicious_process_spl(&window),
            )
        }
        Commands::Ask { question } => {
            let question = question.join(" ").trim().to_string();
            eprintln!("Generating SPL from your question...");
            let spl_query = advisor
                .generate_spl(&question)
                .await
                .context("Could not process question")?;
            (question, spl_query)
        }
        Commands::Search { query } => (
            "Interpret the results of this SPL query.".to_string(),
            query.clone(),
        ),
    };

    info!(query = %spl_query, "Running Splunk search");
    eprintln!("Running Splunk query, please wait...");

    let outcome = splunk.submit_and_wait(&spl_query).await?;

    let mut explanation = advisor
        .explain_results(&question, &spl_query, &outcome.rows)
        .await?;
    if explanation.is_empty() {
        explanation = "No AI summary generated. Try refining the query.".to_string();
    }

    let header = format!("Query SID: {}\nRows: {}\n\n", outcome.sid, outcome.rows.len());
    output::print_chunks(&format!("{header}{explanation}"));

    Ok(())
}
