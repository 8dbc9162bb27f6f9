use std::process;

use moodcast_core::try_decode;

use crate::config::AppConfig;
use crate::share_plan::build_share_plan;
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_share(config: &AppConfig, token: &str, output: OutputFormat, quiet: bool) {
    let spec = match try_decode(token) {
        Ok(spec) => spec,
        Err(e) => {
            report_error(&format!("invalid token: {}", e), output, quiet);
            process::exit(1);
        }
    };
    let plan = build_share_plan(config, &spec, token);

    match output {
        OutputFormat::Json => match serde_json::to_value(&plan) {
            Ok(value) => print_json(&value),
            Err(e) => {
                report_error(&format!("serialization error: {}", e), output, quiet);
                process::exit(1);
            }
        },
        OutputFormat::Text => {
            println!("{}", plan.title);
            println!("  {}", plan.description);
            println!();
            println!("link:      {}", plan.share_url);
            println!("image:     {}", plan.og_image_url);
            println!("download:  {}", plan.image_file_name);
            println!("kakao:     {}", plan.kakao_fallback_url);
            println!("instagram: {}", plan.instagram_url);
            if !quiet {
                println!();
                println!("{}", plan.link_text);
            }
        }
    }
}
