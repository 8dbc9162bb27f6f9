use std::process;

use moodcast_storage::{recent_result_href, FileStore};

use crate::config::AppConfig;
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_last(config: &AppConfig, output: OutputFormat, quiet: bool) {
    let store = FileStore::new(config.store_path.clone());
    match recent_result_href(&store) {
        Some(href) => {
            let url = format!("{}{}", config.site_url, href);
            match output {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "href": href,
                    "url": url,
                })),
                OutputFormat::Text => println!("{}", url),
            }
        }
        None => {
            report_error("no recent result", output, quiet);
            process::exit(1);
        }
    }
}
