use std::process;

use moodcast_core::try_decode;

use super::render_card_text;
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_decode(token: &str, output: OutputFormat, quiet: bool) {
    match try_decode(token) {
        Ok(spec) => match output {
            OutputFormat::Json => print_json(&spec.to_json_value()),
            OutputFormat::Text => println!("{}", render_card_text(&spec)),
        },
        Err(e) => {
            report_error(&format!("invalid token: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
