//! Rendering of the prompt state into the two displayed lines

use super::{
    interface::{TransformContext, Transformer},
    state::{PromptState, Status},
    theme::Theme,
};

/// One redraw of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// The editable line: prefix, message, default hint and value.
    pub line: String,
    /// Error or hint shown under the editable line, possibly empty.
    pub bottom: String,
}

/// Everything besides the state the renderer reads.
pub struct RenderContext<'a> {
    pub message: &'a str,
    pub hint: Option<&'a str>,
    pub transformer: Option<&'a dyn Transformer>,
    pub theme: &'a Theme,
}

pub fn render(state: &PromptState, context: &RenderContext<'_>) -> Frame {
    let theme = context.theme;
    let status = state.status;

    let message = (theme.style.message)(context.message, status);

    let default = match &state.default_value {
        Some(default) if status != Status::Done && state.value.is_empty() => {
            Some((theme.style.default_answer)(default))
        }
        _ => None,
    };

    let value = match context.transformer {
        Some(transformer) => transformer
            .transform(&state.value, TransformContext { is_final: status == Status::Done }),
        None if status == Status::Done => (theme.style.answer)(&state.value),
        None => state.value.clone(),
    };

    let prefix = theme.prefix.for_status(status).to_string();
    let line = [Some(prefix), Some(message), default, Some(value)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let bottom = match (&state.error_msg, context.hint) {
        (Some(error), _) => (theme.style.error)(error),
        (None, Some(hint)) if state.value.is_empty() => (theme.style.hint)(hint),
        _ => String::new(),
    };

    Frame { line, bottom }
}
