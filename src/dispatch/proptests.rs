//! Property-based tests for the dispatcher

use super::intent::RESET_LABEL;
use super::render;
use super::state::*;
use super::transition::*;
use crate::contrast::HexColor;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_flow() -> impl Strategy<Value = Flow> {
    prop_oneof![Just(Flow::Guide), Just(Flow::Palette)]
}

fn arb_step() -> impl Strategy<Value = Step> {
    proptest::sample::select(Step::ALL.to_vec())
}

fn arb_feel() -> impl Strategy<Value = Option<Feel>> {
    prop_oneof![Just(None), Just(Some(Feel::Soft)), Just(Some(Feel::Hard))]
}

fn arb_group_key() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(vec!["soft-static", "soft-dynamic", "hard-static", "hard-dynamic"])
            .prop_map(|key| Some(key.to_string())),
        "[a-z]{1,8}-[a-z]{1,8}".prop_map(Some),
    ]
}

fn arb_hex() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-fA-F]{6}",
        "#[0-9a-fA-F]{3}",
    ]
}

fn arb_state() -> impl Strategy<Value = ConversationState> {
    (
        arb_step(),
        arb_feel(),
        arb_group_key(),
        proptest::option::of(arb_hex()),
    )
        .prop_map(|(step, feel, group_key, hex)| ConversationState {
            step,
            feel,
            group_key,
            hex,
        })
}

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 #.]{0,20}",
        arb_hex(),
        "[0-9]{1,2}(px|rem|em)",
        Just(RESET_LABEL.to_string()),
        Just("모바일 환경".to_string()),
        Just("부드러운 느낌 (soft)".to_string()),
        Just("차분한 (static)".to_string()),
        Just("라벤더".to_string()),
    ]
}

fn ctx(flow: Flow) -> DispatchContext {
    DispatchContext::new(flow)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Same state and message, same turn
    #[test]
    fn prop_transition_is_pure(
        flow in arb_flow(),
        state in arb_state(),
        message in arb_message(),
    ) {
        let ctx = ctx(flow);
        let first = transition(&state, &ctx, Some(&message));
        let second = transition(&state, &ctx, Some(&message));
        prop_assert_eq!(first, second);
    }

    // Every turn lands somewhere real and offers distinct buttons
    #[test]
    fn prop_never_returns_init(
        flow in arb_flow(),
        state in arb_state(),
        message in proptest::option::of(arb_message()),
    ) {
        let result = transition(&state, &ctx(flow), message.as_deref());
        prop_assert_ne!(result.next_state.step, Step::Init);
        prop_assert!(!result.reply.is_empty());

        let mut deduped = result.choices.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), result.choices.len(), "{:?}", result.choices);
    }

    // Reset works from anywhere and clears wizard fields
    #[test]
    fn prop_reset_returns_to_initial_menu(flow in arb_flow(), state in arb_state()) {
        let result = transition(&state, &ctx(flow), Some(RESET_LABEL));
        prop_assert_eq!(&result.next_state, &ConversationState::at(flow.initial_step()));
        prop_assert_eq!(result, render::initial_menu(flow));
    }

    // Text no step understands falls back to the initial menu, except where
    // free text is expected
    #[test]
    fn prop_unrecognized_input_falls_back(
        flow in arb_flow(),
        state in arb_state(),
        message in "[g-z]{1,10}",
    ) {
        prop_assume!(!matches!(state.step, Step::AwaitingHex | Step::AwaitingKeyword));
        let result = transition(&state, &ctx(flow), Some(&message));
        prop_assert_eq!(result, render::initial_menu(flow));
    }

    // A hex color at awaiting_hex is always analyzed, never read as a size
    #[test]
    fn prop_hex_wins_at_awaiting_hex(flow in arb_flow(), hex in arb_hex()) {
        let state = ConversationState::at(Step::AwaitingHex);
        let result = transition(&state, &ctx(flow), Some(&hex));
        let expected = HexColor::parse(&hex).map(|color| color.to_string()).ok();

        prop_assert_eq!(result.next_state.step, Step::ColorAnalyzed);
        prop_assert_eq!(result.next_state.hex, expected);
    }

    // Every button the dispatcher offers is routed when sent back verbatim
    #[test]
    fn prop_offered_choices_always_route(
        flow in arb_flow(),
        picks in proptest::collection::vec((any::<prop::sample::Index>(), arb_hex()), 1..25),
    ) {
        let ctx = ctx(flow);
        let mut current = transition(&ConversationState::default(), &ctx, None);

        for (index, hex) in picks {
            let message = if current.choices.is_empty() {
                hex
            } else {
                index.get(&current.choices).clone()
            };
            let routed = route(&current.next_state, &ctx, &message);
            prop_assert!(
                routed.is_ok(),
                "{:?} at {} was not routed: {:?}",
                message,
                current.next_state.step,
                routed
            );
            if let Ok(next) = routed {
                current = next;
            }
        }
    }
}
