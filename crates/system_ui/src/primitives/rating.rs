use leptos::ev::KeyboardEvent;
use rating_core::{
    ControllerState, Gate, InteractionEvent, ItemFill, ItemGeometry, RatingConfig,
    RatingController, RatingEffect, RatingKey, DEFAULT_MAX, RATING_ROLE,
};
use wasm_bindgen::JsCast;

use super::*;

fn state_token(state: ControllerState) -> &'static str {
    match state {
        ControllerState::Idle => "idle",
        ControllerState::Hovering => "hovering",
        ControllerState::Disabled => "disabled",
        ControllerState::ReadOnly => "readonly",
    }
}

fn error_region_id(id: Option<&str>) -> Option<String> {
    id.map(|id| format!("{id}-error"))
}

/// Normalized horizontal pointer position inside the item that received the event.
fn pointer_fraction(ev: &web_sys::MouseEvent, index: u32) -> f64 {
    let Some(element) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return 0.0;
    };
    let rect = element.get_bounding_client_rect();
    ItemGeometry::new(index, rect.left(), rect.width()).fraction_at(f64::from(ev.client_x()))
}

#[component]
/// Shared rating control: pick a value in `0..=max` by pointer, hover preview, or keyboard.
///
/// Supplying `value` makes the control controlled: `on_change` proposes values and the caller
/// re-supplies `value` to accept them. Otherwise `default_value` seeds internal state once.
pub fn Rating(
    #[prop(optional, into)] value: Option<MaybeSignal<f64>>,
    #[prop(optional)] default_value: Option<f64>,
    #[prop(default = DEFAULT_MAX)] max: u32,
    #[prop(optional)] allow_half: bool,
    #[prop(optional, into)] read_only: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] show_value: bool,
    #[prop(optional)] value_formatter: Option<Callback<(f64, u32), String>>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
) -> impl IntoView {
    let config = RatingConfig {
        value: value.map(|value| value.get_untracked()),
        default_value,
        max,
        allow_half,
        read_only: read_only.get_untracked(),
        disabled: disabled.get_untracked(),
    };
    let (normalized, issues) = config.normalize();
    for issue in &issues {
        logging::warn!("rating config coerced: {issue}");
    }
    if value.is_some() && on_change.is_none() {
        logging::debug_warn!("controlled rating has no on_change listener; input cannot change it");
    }

    let controller = create_rw_signal(RatingController::from_normalized(normalized));

    if let Some(value) = value {
        create_render_effect(move |_| {
            let external = value.get();
            controller.update(|rating| rating.sync_external(external));
        });
    }

    create_render_effect(move |_| {
        let gate = Gate::from_flags(disabled.get(), read_only.get());
        controller.update(|rating| {
            rating.set_gate(gate);
        });
    });

    let dispatch = move |event: InteractionEvent| {
        let effects = controller
            .try_update_untracked(|rating| rating.handle(event))
            .unwrap_or_default();
        // Empty effects mean nothing moved; leave subscribers alone.
        if effects.is_empty() {
            return;
        }
        controller.update(|_| {});
        for effect in effects {
            if let RatingEffect::Change(next) = effect {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(next);
                }
            }
        }
    };

    let aria_label = store_value(aria_label);
    let aria_labelledby = store_value(aria_labelledby);
    let accessibility = create_memo(move |_| {
        controller.with(|rating| {
            let label = aria_label.get_value();
            let labelled_by = aria_labelledby.get_value();
            rating.accessibility(label.as_deref(), labelled_by.as_deref())
        })
    });

    let error_id = error_region_id(id.as_deref());
    let described_by = {
        let error_id = error_id.clone();
        let has_message = error_message.is_some();
        move || {
            if error.get() && has_message {
                error_id.clone()
            } else {
                None
            }
        }
    };

    let items = (0..normalized.max)
        .map(|index| {
            let fill = move || {
                controller.with(|rating| ItemFill::for_item(rating.current_value(), index).token())
            };
            view! {
                <span
                    data-ui-slot="item"
                    data-ui-index=index
                    data-ui-fill=fill
                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                        dispatch(InteractionEvent::PointerDown {
                            index,
                            fraction: pointer_fraction(&ev, index),
                        });
                    }
                    on:pointermove=move |ev: web_sys::PointerEvent| {
                        dispatch(InteractionEvent::PointerEnter {
                            index,
                            fraction: pointer_fraction(&ev, index),
                        });
                    }
                >
                    <span data-ui-slot="glyph" aria-hidden="true">"\u{2605}"</span>
                </span>
            }
        })
        .collect_view();

    let value_text = move || {
        let (current, max) = controller.with(|rating| (rating.current_value(), rating.max()));
        match value_formatter {
            Some(formatter) => formatter.call((current, max)),
            None => rating_core::format_value(current, max),
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-rating", layout_class)
            id=id
            role=RATING_ROLE
            aria-label=move || accessibility.with(|a11y| a11y.label.clone())
            aria-labelledby=move || accessibility.with(|a11y| a11y.labelled_by.clone())
            aria-describedby=described_by
            aria-readonly=move || bool_token(accessibility.with(|a11y| a11y.read_only))
            aria-disabled=move || bool_token(accessibility.with(|a11y| a11y.disabled))
            aria-invalid=move || bool_token(error.get())
            tabindex=move || accessibility.with(|a11y| a11y.tab_index)
            data-ui-primitive="true"
            data-ui-kind="rating"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-state=move || controller.with(|rating| state_token(rating.state()))
            data-ui-value=move || controller.with(|rating| rating.committed_value())
            data-ui-value-now=move || accessibility.with(|a11y| a11y.value_now)
            data-ui-max=move || accessibility.with(|a11y| a11y.value_max)
            data-ui-readonly=move || bool_token(accessibility.with(|a11y| a11y.read_only))
            data-ui-disabled=move || bool_token(accessibility.with(|a11y| a11y.disabled))
            data-ui-error=move || bool_token(error.get())
            on:keydown=move |ev: KeyboardEvent| {
                if let Some(key) = RatingKey::from_key_name(&ev.key()) {
                    ev.prevent_default();
                    dispatch(InteractionEvent::KeyPress(key));
                }
            }
        >
            <span
                data-ui-slot="items"
                on:pointerleave=move |_| dispatch(InteractionEvent::PointerLeave)
            >
                {items}
            </span>
            {show_value.then(|| view! { <span data-ui-slot="value">{value_text}</span> })}
            {move || {
                error
                    .get()
                    .then(|| error_message.clone())
                    .flatten()
                    .map(|message| {
                        view! {
                            <FieldError id=error_id.clone() ui_slot="message">
                                {message}
                            </FieldError>
                        }
                    })
            }}
        </div>
    }
}
