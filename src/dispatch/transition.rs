//! Pure transition function
//!
//! `(state, message) -> (reply, choices, next state)`. Routing is keyed by
//! the pair, so the same text can mean different things at different steps.
//! Every error kind is recovered here; nothing propagates to the caller.

use super::classify::SizeToken;
use super::error::DispatchError;
use super::intent::{Intent, Topic, RESET_LABEL};
use super::render;
use super::state::{group_key, ConversationState, DispatchResult, Flow, Step};
use crate::catalog::Catalog;
use crate::contrast::HexColor;

/// Immutable inputs shared by every turn
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext {
    pub flow: Flow,
    pub catalog: &'static Catalog,
}

impl DispatchContext {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            catalog: Catalog::global(),
        }
    }
}

/// Run one conversation turn.
///
/// Pure: the same `(state, message)` always yields the same result.
pub fn transition(
    state: &ConversationState,
    ctx: &DispatchContext,
    message: Option<&str>,
) -> DispatchResult {
    let message = message.map_or("", str::trim);

    if state.step == Step::Init || message == RESET_LABEL {
        return render::initial_menu(ctx.flow);
    }

    route(state, ctx, message).unwrap_or_else(|err| recover(err, ctx))
}

pub(super) fn route(
    state: &ConversationState,
    ctx: &DispatchContext,
    message: &str,
) -> Result<DispatchResult, DispatchError> {
    if let Some(intent) = Intent::parse(ctx.flow, state.step, message, ctx.catalog) {
        return apply(intent, state, ctx);
    }

    match (ctx.flow, state.step) {
        (_, Step::AwaitingHex) => classify_free_text(ctx.flow, message),
        (Flow::Palette, Step::AwaitingKeyword) => pick_keyword(state, ctx, message),
        (_, step) => Err(DispatchError::UnrecognizedInput {
            step,
            message: message.to_string(),
        }),
    }
}

fn apply(
    intent: Intent,
    state: &ConversationState,
    ctx: &DispatchContext,
) -> Result<DispatchResult, DispatchError> {
    let catalog = ctx.catalog;
    let result = match intent {
        Intent::Reset => render::initial_menu(ctx.flow),

        Intent::Topic(Topic::FontSize) => render::font_size_menu(),
        Intent::Topic(Topic::Spacing) | Intent::SpacingGuide => render::spacing_menu(),
        Intent::Topic(Topic::Pairing) | Intent::AnotherPairing => render::pairing_menu(catalog)?,
        Intent::Topic(Topic::Color) => render::color_overview(catalog)?,
        Intent::Topic(Topic::Checklist) => render::checklist(),
        Intent::Topic(Topic::Responsive) => render::responsive_tips(),

        Intent::Device(device) => render::device_guide(catalog, device)?,
        Intent::SpacingUse(usage) => render::spacing_guide(catalog, usage)?,
        Intent::Pairing { key, .. } => render::pairing_card(catalog, key)?,

        Intent::AnalyzeHex
        | Intent::AnotherColor
        | Intent::Retry
        | Intent::AnotherSize
        | Intent::HaveHex => render::hex_prompt(),

        Intent::Recommend | Intent::RecommendAgain => render::feel_question(),
        Intent::Feel(feel) => render::mood_question(feel),
        Intent::Energy(energy) => {
            let feel = state
                .feel
                .ok_or_else(|| DispatchError::UnknownChoiceGroup(format!("?-{}", energy.as_str())))?;
            let key = group_key(feel, energy);
            render::keyword_question(catalog, feel, &key, false)
                .map_err(|_| DispatchError::UnknownChoiceGroup(key))?
        }

        Intent::AnalyzeRecommended => {
            let raw = state.hex.as_deref().unwrap_or_default();
            let color = HexColor::parse(raw)
                .map_err(|_| DispatchError::MalformedColor(raw.to_string()))?;
            render::contrast_analysis(ctx.flow, color)
        }
    };
    Ok(result)
}

/// Hex color first; only if that fails, look for a font-size token.
fn classify_free_text(flow: Flow, message: &str) -> Result<DispatchResult, DispatchError> {
    if let Ok(color) = HexColor::parse(message) {
        return Ok(render::contrast_analysis(flow, color));
    }
    if let Some(size) = SizeToken::find(message) {
        return Ok(render::size_verdict(flow, size));
    }
    Err(DispatchError::MalformedColor(message.to_string()))
}

/// Keywords outside the group re-prompt with the same choices. A missing or
/// unknown group, or one that doesn't belong to `feel`, is `UnknownChoiceGroup`.
fn pick_keyword(
    state: &ConversationState,
    ctx: &DispatchContext,
    message: &str,
) -> Result<DispatchResult, DispatchError> {
    let key = state.group_key.as_deref().unwrap_or_default();
    let unknown_group = || DispatchError::UnknownChoiceGroup(key.to_string());
    let feel = state
        .feel
        .filter(|feel| {
            key.strip_prefix(feel.as_str())
                .is_some_and(|rest| rest.starts_with('-'))
        })
        .ok_or_else(unknown_group)?;
    let keywords = ctx
        .catalog
        .keys(&["palette", key])
        .map_err(|_| unknown_group())?;

    if keywords.iter().any(|keyword| *keyword == message) {
        Ok(render::recommendation(ctx.catalog, feel, key, message)?)
    } else {
        render::keyword_question(ctx.catalog, feel, key, true).map_err(|_| unknown_group())
    }
}

fn recover(err: DispatchError, ctx: &DispatchContext) -> DispatchResult {
    match err {
        DispatchError::MalformedColor(input) => {
            tracing::debug!(input = %input, "Not a hex color or font size, re-prompting");
            render::hex_reprompt()
        }
        DispatchError::UnknownChoiceGroup(key) => {
            tracing::debug!(group = %key, "Unknown palette group, restarting recommendation");
            render::feel_question()
        }
        DispatchError::UnrecognizedInput { step, message } => {
            tracing::debug!(step = %step, message = %message, "No route, falling back to menu");
            render::initial_menu(ctx.flow)
        }
        DispatchError::Catalog(e) => {
            tracing::warn!(error = %e, "Catalog lookup failed, falling back to menu");
            render::initial_menu(ctx.flow)
        }
    }
}
