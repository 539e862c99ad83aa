use super::*;

#[component]
/// Shared validation message region announced to assistive technology.
///
/// Renders in the danger tone unless `tone` says otherwise, e.g. for advisory hints.
pub fn FieldError(
    #[prop(default = None)] id: Option<String>,
    #[prop(default = TextTone::Danger)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-field-error", layout_class)
            id=id
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="field-error"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}
