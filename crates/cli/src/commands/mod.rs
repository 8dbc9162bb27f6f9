//! One module per `moodcast` subcommand. Each `cmd_*` prints its result and
//! exits the process with code 1 on failure.

pub(crate) mod create;
pub(crate) mod decode;
pub(crate) mod last;
pub(crate) mod share;
pub(crate) mod validate;

use moodcast_core::CardSpec;

/// Human-readable rendering of a result card.
pub(crate) fn render_card_text(spec: &CardSpec) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} | turbulence {}% ({})\n",
        spec.headline(),
        spec.turbulence(),
        spec.weather()
    ));
    out.push_str(&format!("  {}\n", spec.vibe()));
    out.push_str(&format!("  -> {}\n", spec.action()));
    out.push_str(&format!(
        "  answers: energy={} social={} pressure={}\n",
        spec.energy(),
        spec.social(),
        spec.pressure()
    ));
    out.push_str(&format!("  created: {}", spec.created_at()));
    out
}
