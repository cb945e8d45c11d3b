//! Small presentational building blocks.
//!
//! The design system is deliberately tiny: buttons, text fields, modal
//! dialogs, cards, chips and pagination, all styled through semantic CSS
//! classes in `styles.css`. Anything page-specific stays in the page.

use leptos::*;

// =============================================================================
// Button
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Ghost,
    Flat,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Flat => "btn-flat",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// A button that can show a busy spinner in place of its label.
///
/// While `loading` is true the button is also disabled, so a running
/// action cannot be triggered twice from the same control.
#[component]
pub fn Button(
    #[prop(into)] on_press: Callback<()>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let classes = format!("btn {} {} {}", variant.class(), size.class(), class)
        .trim_end()
        .to_string();

    view! {
        <button
            type="button"
            class=classes
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if !disabled.get_untracked() && !loading.get_untracked() {
                    on_press.call(());
                }
            }
        >
            <Show when=move || loading.get() fallback=move || children()>
                <span class="spinner"></span>
            </Show>
        </button>
    }
}

// =============================================================================
// Text field
// =============================================================================

/// Labeled input bound to a string signal pair.
#[component]
pub fn TextField(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = String::from("text"), into)] input_type: String,
) -> impl IntoView {
    view! {
        <div class="field">
            {label.map(|text| view! { <label class="field-label">{text}</label> })}
            <input
                type=input_type
                class="field-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

// =============================================================================
// Modal & Disclosure
// =============================================================================

/// Open/closed state for a modal, menu or other toggleable surface.
#[derive(Clone, Copy)]
pub struct Disclosure {
    pub is_open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
}

impl Disclosure {
    pub fn open(&self) {
        self.set_open.set(true);
    }

    pub fn close(&self) {
        self.set_open.set(false);
    }

    pub fn toggle(&self) {
        self.set_open.update(|open| *open = !*open);
    }
}

pub fn use_disclosure() -> Disclosure {
    let (is_open, set_open) = create_signal(false);
    Disclosure { is_open, set_open }
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes
/// it; clicks inside the panel do not.
#[component]
pub fn Modal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| view! { }>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ModalHeader(children: Children) -> impl IntoView {
    view! { <div class="modal-header">{children()}</div> }
}

#[component]
pub fn ModalBody(children: Children) -> impl IntoView {
    view! { <div class="modal-body">{children()}</div> }
}

#[component]
pub fn ModalFooter(children: Children) -> impl IntoView {
    view! { <div class="modal-footer">{children()}</div> }
}

// =============================================================================
// Card
// =============================================================================

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = format!("card {class}").trim_end().to_string();
    view! {
        <div class=classes>
            {title.map(|text| view! { <div class="card-header">{text}</div> })}
            <div class="card-body">{children()}</div>
        </div>
    }
}

// =============================================================================
// Chip
// =============================================================================

#[component]
pub fn Chip(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let classes = format!("chip {class}").trim_end().to_string();
    view! { <span class=classes>{children()}</span> }
}

// =============================================================================
// Pagination
// =============================================================================

/// Prev / numbered / Next controls. Renders nothing for a single page.
#[component]
pub fn Pagination(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 } fallback=|| view! { }>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Prev"
                </button>
                <For
                    each=move || 1..=total.get()
                    key=|p| *p
                    children=move |p| {
                        view! {
                            <button
                                class="page-btn"
                                class:active=move || page.get() == p
                                on:click=move |_| set_page.set(p)
                            >
                                {p}
                            </button>
                        }
                    }
                />
                <button
                    class="page-btn"
                    disabled=move || page.get() >= total.get()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

// =============================================================================
// Spinner
// =============================================================================

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner"></span> }
}
