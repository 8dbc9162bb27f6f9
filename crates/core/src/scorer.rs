//! Scoring: three answers in, one immutable [`CardSpec`] out.
//!
//! Turbulence is a weighted blend of per-answer sub-scores:
//!
//! ```text
//! turbulence = round((100 - energy) * 0.40 + (100 - social) * 0.25 + pressure * 0.35)
//! ```
//!
//! The blend is computed in integer hundredths, so round-half-up is exact.

use time::OffsetDateTime;

use crate::types::{
    CardCopy, CardSpec, Energy, InputState, Pressure, Social, Weather, CARD_SPEC_VERSION,
    MAX_TURBULENCE,
};

/// Blend weights in hundredths; they sum to 100.
const ENERGY_WEIGHT: u32 = 40;
const SOCIAL_WEIGHT: u32 = 25;
const PRESSURE_WEIGHT: u32 = 35;

/// Turbulence above which the action is replaced by [`EMERGENCY_ACTION`].
pub const EMERGENCY_THRESHOLD: u8 = 90;

pub const EMERGENCY_ACTION: &str = "응급 리셋: 물 마시기, 간단한 식사, 짧은 산책 후 알림 끄기.";

fn energy_score(energy: Energy) -> u32 {
    match energy {
        Energy::High => 85,
        Energy::Mid => 55,
        Energy::Low => 20,
    }
}

fn social_score(social: Social) -> u32 {
    match social {
        Social::Open => 85,
        Social::Neutral => 55,
        Social::Off => 20,
    }
}

fn pressure_score(pressure: Pressure) -> u32 {
    match pressure {
        Pressure::Calm => 20,
        Pressure::Normal => 50,
        Pressure::Overload => 90,
    }
}

/// Weighted turbulence for a set of answers, in `0..=100`.
pub fn turbulence(input: &InputState) -> u8 {
    let hundredths = (100 - energy_score(input.energy)) * ENERGY_WEIGHT
        + (100 - social_score(input.social)) * SOCIAL_WEIGHT
        + pressure_score(input.pressure) * PRESSURE_WEIGHT;
    let rounded = (hundredths + 50) / 100;
    rounded.min(u32::from(MAX_TURBULENCE)) as u8
}

/// Bucket a turbulence score. Each threshold belongs to the upper bucket.
pub fn weather_for(turbulence: u8) -> Weather {
    match turbulence {
        0..=24 => Weather::Clear,
        25..=44 => Weather::Cloudy,
        45..=64 => Weather::Rain,
        65..=81 => Weather::Storm,
        _ => Weather::Typhoon,
    }
}

/// Default card copy for a weather bucket.
pub fn weather_copy(weather: Weather) -> CardCopy {
    match weather {
        Weather::Clear => CardCopy {
            headline: "맑음 모드",
            vibe: "지금 감정 기류가 안정적이고 선명해요.",
            action: "미뤄둔 일 하나를 지금 바로 끝내보세요.",
        },
        Weather::Cloudy => CardCopy {
            headline: "구름 모드",
            vibe: "기분은 유지되지만 집중이 자주 흔들립니다.",
            action: "중요 결정은 가볍게 넘기고 짧은 일부터 처리하세요.",
        },
        Weather::Rain => CardCopy {
            headline: "비 주의보",
            vibe: "압박이 쌓이면 에너지가 빠르게 떨어져요.",
            action: "30분만 잡음 차단하고 호흡을 다시 맞추세요.",
        },
        Weather::Storm => CardCopy {
            headline: "폭풍 구간",
            vibe: "스트레스와 사회적 피로가 동시에 몰려옵니다.",
            action: "오늘은 선택 일정부터 줄이고 에너지를 지키세요.",
        },
        Weather::Typhoon => CardCopy {
            headline: "태풍 경보",
            vibe: "과부하 상태로 생존 모드에 가까워요.",
            action: "필수 일만 처리하고 감정 대화는 내일로 미루세요.",
        },
    }
}

/// Card copy for a bucket, with the emergency override applied.
///
/// The override depends on turbulence alone, not on the bucket.
pub fn copy_for(weather: Weather, turbulence: u8) -> CardCopy {
    let base = weather_copy(weather);
    if turbulence > EMERGENCY_THRESHOLD {
        CardCopy {
            action: EMERGENCY_ACTION,
            ..base
        }
    } else {
        base
    }
}

/// Score a set of answers, stamping the record with the current UTC time.
pub fn build_card_spec(input: InputState) -> CardSpec {
    build_card_spec_at(input, OffsetDateTime::now_utc())
}

/// Alias of [`build_card_spec`].
pub fn score(input: InputState) -> CardSpec {
    build_card_spec(input)
}

/// Score a set of answers with an explicit creation time.
pub fn build_card_spec_at(input: InputState, created_at: OffsetDateTime) -> CardSpec {
    let turbulence = turbulence(&input);
    let weather = weather_for(turbulence);
    let copy = copy_for(weather, turbulence);

    CardSpec {
        version: CARD_SPEC_VERSION,
        energy: input.energy,
        social: input.social,
        pressure: input.pressure,
        weather,
        turbulence,
        headline: copy.headline.to_string(),
        vibe: copy.vibe.to_string(),
        action: copy.action.to_string(),
        created_at: crate::timestamp::format_timestamp(created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ACTION_MAX_CHARS, HEADLINE_MAX_CHARS, VIBE_MAX_CHARS};
    use time::macros::datetime;

    fn input(energy: Energy, social: Social, pressure: Pressure) -> InputState {
        InputState::new(energy, social, pressure)
    }

    #[test]
    fn test_every_input_scores_within_bounds() {
        for i in InputState::all() {
            let spec = build_card_spec(i);
            assert!(spec.turbulence() <= 100, "{:?}", i);
            assert_eq!(spec.weather(), weather_for(spec.turbulence()));
            assert_eq!(spec.version(), 1);
            assert_eq!(spec.input(), i);

            let headline = spec.headline().chars().count();
            let vibe = spec.vibe().chars().count();
            let action = spec.action().chars().count();
            assert!((1..=HEADLINE_MAX_CHARS).contains(&headline));
            assert!((1..=VIBE_MAX_CHARS).contains(&vibe));
            assert!((1..=ACTION_MAX_CHARS).contains(&action));
        }
    }

    #[test]
    fn test_worst_case_is_typhoon_without_override() {
        let spec = build_card_spec(input(Energy::Low, Social::Off, Pressure::Overload));
        assert_eq!(spec.turbulence(), 84);
        assert_eq!(spec.weather(), Weather::Typhoon);
        assert_eq!(spec.headline(), "태풍 경보");
        assert_eq!(spec.action(), weather_copy(Weather::Typhoon).action);
    }

    #[test]
    fn test_best_case_is_clear() {
        let spec = build_card_spec(input(Energy::High, Social::Open, Pressure::Calm));
        assert_eq!(spec.turbulence(), 17);
        assert_eq!(spec.weather(), Weather::Clear);
        assert_eq!(spec.headline(), "맑음 모드");
    }

    #[test]
    fn test_half_values_round_up() {
        // 43.5 and 69.5 before rounding
        assert_eq!(turbulence(&input(Energy::High, Social::Off, Pressure::Normal)), 44);
        assert_eq!(turbulence(&input(Energy::Mid, Social::Off, Pressure::Overload)), 70);
        // 45.0 exactly lands on the rain threshold
        let spec = build_card_spec(input(Energy::Mid, Social::Off, Pressure::Calm));
        assert_eq!(spec.turbulence(), 45);
        assert_eq!(spec.weather(), Weather::Rain);
    }

    #[test]
    fn test_turbulence_is_monotonic_in_energy() {
        for &social in Social::ALL {
            for &pressure in Pressure::ALL {
                let high = turbulence(&input(Energy::High, social, pressure));
                let mid = turbulence(&input(Energy::Mid, social, pressure));
                let low = turbulence(&input(Energy::Low, social, pressure));
                assert!(high <= mid && mid <= low);
            }
        }
    }

    #[test]
    fn test_turbulence_is_monotonic_in_social() {
        for &energy in Energy::ALL {
            for &pressure in Pressure::ALL {
                let open = turbulence(&input(energy, Social::Open, pressure));
                let neutral = turbulence(&input(energy, Social::Neutral, pressure));
                let off = turbulence(&input(energy, Social::Off, pressure));
                assert!(open <= neutral && neutral <= off);
            }
        }
    }

    #[test]
    fn test_turbulence_is_monotonic_in_pressure() {
        for &energy in Energy::ALL {
            for &social in Social::ALL {
                let calm = turbulence(&input(energy, social, Pressure::Calm));
                let normal = turbulence(&input(energy, social, Pressure::Normal));
                let overload = turbulence(&input(energy, social, Pressure::Overload));
                assert!(calm <= normal && normal <= overload);
            }
        }
    }

    #[test]
    fn test_thresholds_belong_to_upper_bucket() {
        assert_eq!(weather_for(0), Weather::Clear);
        assert_eq!(weather_for(24), Weather::Clear);
        assert_eq!(weather_for(25), Weather::Cloudy);
        assert_eq!(weather_for(44), Weather::Cloudy);
        assert_eq!(weather_for(45), Weather::Rain);
        assert_eq!(weather_for(64), Weather::Rain);
        assert_eq!(weather_for(65), Weather::Storm);
        assert_eq!(weather_for(81), Weather::Storm);
        assert_eq!(weather_for(82), Weather::Typhoon);
        assert_eq!(weather_for(100), Weather::Typhoon);
    }

    #[test]
    fn test_buckets_ascend_with_turbulence() {
        let mut previous = weather_for(0);
        for t in 1..=100u8 {
            let current = weather_for(t);
            let prev_rank = Weather::ALL.iter().position(|w| *w == previous).unwrap();
            let cur_rank = Weather::ALL.iter().position(|w| *w == current).unwrap();
            assert!(cur_rank == prev_rank || cur_rank == prev_rank + 1, "t={}", t);
            previous = current;
        }
    }

    #[test]
    fn test_emergency_override_above_ninety() {
        for &weather in Weather::ALL {
            let at_threshold = copy_for(weather, 90);
            assert_eq!(at_threshold, weather_copy(weather));

            let above = copy_for(weather, 91);
            assert_eq!(above.action, EMERGENCY_ACTION);
            assert_eq!(above.headline, weather_copy(weather).headline);
            assert_eq!(above.vibe, weather_copy(weather).vibe);
        }
    }

    #[test]
    fn test_any_input_above_ninety_gets_emergency_action() {
        for i in InputState::all() {
            let spec = build_card_spec(i);
            if spec.turbulence() > EMERGENCY_THRESHOLD {
                assert_eq!(spec.action(), EMERGENCY_ACTION);
            } else {
                assert_ne!(spec.action(), EMERGENCY_ACTION);
            }
        }
    }

    #[test]
    fn test_explicit_timestamp_is_stamped() {
        let spec = build_card_spec_at(
            input(Energy::Mid, Social::Neutral, Pressure::Normal),
            datetime!(2026-10-19 08:30:00.25 UTC),
        );
        assert_eq!(spec.created_at(), "2026-10-19T08:30:00.250Z");
        assert_eq!(spec.turbulence(), 47);
        assert_eq!(spec.weather(), Weather::Rain);
    }

    #[test]
    fn test_score_is_deterministic_apart_from_timestamp() {
        let at = datetime!(2026-01-01 00:00 UTC);
        for i in InputState::all() {
            assert_eq!(build_card_spec_at(i, at), build_card_spec_at(i, at));
        }
    }
}
