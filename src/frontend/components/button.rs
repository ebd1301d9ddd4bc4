use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Small => "px-4 py-2 text-sm",
            Self::Medium => "px-6 py-3 text-base",
            Self::Large => "px-8 py-4 text-lg",
        }
    }
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-orange-500 to-amber-500 text-white hover:from-orange-600 hover:to-amber-600 hover:shadow-lg hover:shadow-orange-500/25 focus:ring-orange-500",
            Self::Ghost => "border border-slate-700 text-slate-300 hover:border-slate-500 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    format!(
        "inline-flex items-center justify-center gap-2 font-semibold rounded-lg transition-all duration-200 \
         focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950 \
         disabled:opacity-50 disabled:cursor-not-allowed {} {} {}",
        size.classes(),
        variant.classes(),
        if full_width { "w-full" } else { "" },
    )
}

/// Submit button, or a link styled as one when `href` is set.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
) -> impl IntoView {
    let classes = button_classes(variant, size, full_width);

    if !href.is_empty() {
        return view! { <a href=href class=classes>{children()}</a> }.into_any();
    }

    let loading_text = if loading_text.is_empty() { "Loading...".to_string() } else { loading_text };
    let button_type = if button_type.is_empty() { "submit".to_string() } else { button_type };
    let body = children();

    view! {
        <button type=button_type class=classes disabled=move || loading.get()>
            <Show
                when=move || loading.get()
                fallback=|| ()
            >
                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text.clone()}
            </Show>
            <span class:hidden=move || loading.get()>{body}</span>
        </button>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_is_primary_medium() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), false);
        assert!(classes.contains("from-orange-500"));
        assert!(classes.contains("px-6 py-3"));
        assert!(!classes.contains("w-full"));
    }

    #[test]
    fn ghost_large_link_uses_outline_and_large_padding() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Large, false);
        assert!(classes.contains("border-slate-700"));
        assert!(!classes.contains("from-orange-500"));
        assert!(classes.contains("px-8 py-4 text-lg"));
    }

    #[test]
    fn small_full_width_button() {
        let classes = button_classes(ButtonVariant::Primary, ButtonSize::Small, true);
        assert!(classes.contains("px-4 py-2 text-sm"));
        assert!(classes.contains("w-full"));
    }
}
