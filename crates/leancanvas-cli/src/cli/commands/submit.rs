use leancanvas_core::report::{format_outcome, SPINNER_TEXT};
use leancanvas_core::{CanvasInput, FeedbackRequester};

use crate::cli::args::{OutputFormat, SubmitArgs};
use crate::exit_codes;

pub async fn run(args: SubmitArgs) -> anyhow::Result<i32> {
    let canvas = CanvasInput::load(&args.canvas)?;

    let config = args.endpoint.to_config();
    let requester = match FeedbackRequester::new(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(e.exit_code());
        }
    };

    let untouched = canvas.untouched();
    if !untouched.is_empty() {
        tracing::info!(
            sections = untouched.len(),
            "submitting sections that still hold placeholder text"
        );
    }

    eprintln!("{}", SPINNER_TEXT);
    let outcome = requester.submit(&canvas).await;

    match args.format {
        OutputFormat::Text => print!("{}", format_outcome(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(if outcome.is_success() {
        exit_codes::OK
    } else {
        exit_codes::REQUEST_FAILED
    })
}
