use moodcast_core::{build_card_spec, encode, Energy, InputState, Pressure, Social};
use moodcast_storage::{remember_last, FileStore};
use rand::seq::SliceRandom;
use rand::Rng;

use super::render_card_text;
use crate::config::AppConfig;
use crate::{print_json, OutputFormat};

/// Answers given on the command line; any of them may be missing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Answers {
    pub(crate) energy: Option<Energy>,
    pub(crate) social: Option<Social>,
    pub(crate) pressure: Option<Pressure>,
}

impl Answers {
    /// Fill missing answers: randomly when `random` is set, otherwise with
    /// the create screen's starting selection.
    pub(crate) fn resolve<R: Rng + ?Sized>(self, random: bool, rng: &mut R) -> InputState {
        let defaults = InputState::default();
        let energy = self.energy.unwrap_or_else(|| {
            pick(random, Energy::ALL, rng).unwrap_or(defaults.energy)
        });
        let social = self.social.unwrap_or_else(|| {
            pick(random, Social::ALL, rng).unwrap_or(defaults.social)
        });
        let pressure = self.pressure.unwrap_or_else(|| {
            pick(random, Pressure::ALL, rng).unwrap_or(defaults.pressure)
        });
        InputState::new(energy, social, pressure)
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(random: bool, choices: &[T], rng: &mut R) -> Option<T> {
    if random {
        choices.choose(rng).copied()
    } else {
        None
    }
}

pub(crate) fn cmd_create(
    config: &AppConfig,
    answers: Answers,
    random: bool,
    output: OutputFormat,
    quiet: bool,
) {
    let input = answers.resolve(random, &mut rand::thread_rng());
    let spec = build_card_spec(input);
    let token = encode(&spec);
    let share_url = config.result_url(Some(&token));

    let store = FileStore::new(config.store_path.clone());
    remember_last(&store, &token);
    tracing::debug!(turbulence = spec.turbulence(), weather = %spec.weather(), "created result");

    match output {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "spec": spec.to_json_value(),
                "token": token,
                "share_url": share_url,
            }));
        }
        OutputFormat::Text => {
            if quiet {
                println!("{}", share_url);
            } else {
                println!("{}", render_card_text(&spec));
                println!();
                println!("share: {}", share_url);
            }
        }
    }
}
