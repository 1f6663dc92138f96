//! Property tests: every normalized quantity stays in range and decisions replay.

use psyche_brain::{
    resolve_appraisal, AgentSnapshot, BrainConfig, BrainProfile, Choice, DecisionEngine,
    InfantModel, InfantTuning, InternalState, LifeEvent, Personality, Temperament,
    TraitProjection,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_temperament() -> impl Strategy<Value = Temperament> {
    prop::array::uniform9(-50.0f64..=150.0).prop_map(|t| Temperament {
        activity: t[0],
        rhythmicity: t[1],
        approach: t[2],
        adaptability: t[3],
        intensity: t[4],
        mood: t[5],
        persistence: t[6],
        distractibility: t[7],
        threshold: t[8],
    })
}

fn arb_personality() -> impl Strategy<Value = Personality> {
    prop::array::uniform5(0.0f64..=100.0).prop_map(|p| Personality {
        openness: p[0],
        conscientiousness: p[1],
        extraversion: p[2],
        agreeableness: p[3],
        neuroticism: p[4],
    })
}

fn arb_state() -> impl Strategy<Value = InternalState> {
    prop::array::uniform5(0.0f64..=1.0).prop_map(|s| InternalState {
        energy_level: s[0],
        satiety_level: s[1],
        security_level: s[2],
        stimulation_load: s[3],
        last_event_novelty: s[4],
    })
}

fn arb_choice() -> impl Strategy<Value = Choice> {
    (
        prop::collection::btree_map(
            prop::sample::select(vec![
                "openness",
                "conscientiousness",
                "extraversion",
                "agreeableness",
                "neuroticism",
                "luck",
            ]),
            -40.0f64..=40.0,
            0..4,
        ),
        prop::collection::btree_map(
            prop::sample::select(vec!["energy", "satiety", "security", "money"]),
            -200.0f64..=200.0,
            0..3,
        ),
    )
        .prop_map(|(traits, stats)| {
            let mut choice = Choice::new();
            for (k, v) in traits {
                choice = choice.with_trait(k, v);
            }
            for (k, v) in stats {
                choice = choice.with_stat(k, v);
            }
            choice
        })
}

fn arb_raw_profile() -> impl Strategy<Value = Value> {
    (
        prop::option::of(0u32..10),
        prop::option::of(any::<bool>()),
        prop::option::of(-1.0f64..=2.0),
        prop::option::of(prop::array::uniform5(-1.0f64..=2.0)),
    )
        .prop_map(|(version, active, risk_penalty, state)| {
            let mut obj = Map::new();
            if let Some(v) = version {
                obj.insert("version".into(), json!(v));
            }
            if let Some(a) = active {
                obj.insert("infant_model_active".into(), json!(a));
            }
            if let Some(p) = risk_penalty {
                obj.insert("tuning".into(), json!({ "risk_penalty": p }));
            }
            if let Some(s) = state {
                obj.insert(
                    "state".into(),
                    json!({
                        "energy_level": s[0],
                        "satiety_level": s[1],
                        "security_level": s[2],
                        "stimulation_load": s[3],
                        "last_event_novelty": s[4],
                    }),
                );
            }
            Value::Object(obj)
        })
}

fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn drives_stay_in_unit_range(t in arb_temperament(), p in arb_personality()) {
        let infant = t.project();
        for x in [
            infant.novelty_tolerance,
            infant.threat_sensitivity,
            infant.energy_budget,
            infant.self_regulation,
            infant.comfort_bias,
        ] {
            prop_assert!(in_unit(x));
        }

        let generic = p.project();
        for x in [
            generic.curiosity,
            generic.caution,
            generic.sociability,
            generic.diligence,
            generic.stamina,
        ] {
            prop_assert!(in_unit(x));
        }
    }

    #[test]
    fn appraisals_stay_in_unit_range(choice in arb_choice()) {
        let a = resolve_appraisal(&choice);
        for x in [
            a.comfort_value,
            a.energy_cost,
            a.safety_risk,
            a.novelty_load,
            a.familiarity,
            a.social_soothing,
        ] {
            prop_assert!(in_unit(x));
        }
    }

    #[test]
    fn advanced_state_stays_in_unit_range(
        t in arb_temperament(),
        s in arb_state(),
        choice in arb_choice()
    ) {
        let model = InfantModel::new(InfantTuning::default(), t.project());
        let a = resolve_appraisal(&choice);
        let score = model.score(&a, &s);
        prop_assert!(score.utility.is_finite());
        prop_assert!(in_unit(score.overload));

        let next = model.advance(&s, &a, score.overload, &choice.effects);
        for x in [
            next.energy_level,
            next.satiety_level,
            next.security_level,
            next.stimulation_load,
            next.last_event_novelty,
        ] {
            prop_assert!(in_unit(x));
        }
    }

    #[test]
    fn normalization_is_idempotent(raw in arb_raw_profile()) {
        let config = BrainConfig::default();
        let once = BrainProfile::normalize(&raw, &config).unwrap();
        let twice = BrainProfile::normalize(&once.to_value(), &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resolution_replays_from_the_key(
        seed in any::<u64>(),
        month in 0u32..2400,
        age_months in 0u32..60,
        t in arb_temperament(),
        p in arb_personality(),
        choices in prop::collection::vec(arb_choice(), 1..5)
    ) {
        let engine = DecisionEngine::new(seed, BrainConfig {
            infant_model_enabled: true,
            ..BrainConfig::default()
        });
        let agent = AgentSnapshot::new(seed.rotate_left(7), age_months)
            .with_temperament(t)
            .with_personality(p);
        let event = LifeEvent::new("prop_event", choices).infant_eligible(true);

        let first = engine.resolve(&agent, &event, month).unwrap();
        let second = engine.resolve(&agent, &event, month).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.chosen.len(), 1);
        prop_assert!(first.chosen[0] < event.choices.len());
    }
}
