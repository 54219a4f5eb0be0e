//! Confirms the OpenAI key is visible from `.env` or the environment.

use knowledge_navigator::clients::OpenAIClient;
use knowledge_navigator::config::{credential_report, KeyFromEnv};
use std::process::ExitCode;

fn main() -> ExitCode {
    match credential_report(OpenAIClient::find_key().as_deref()) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
