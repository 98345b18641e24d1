use leptos::prelude::*;
use statim_core::{CardConfig, Icon};

/// Frosted card with an optional icon and an upper-cased title.
#[component]
pub fn GlassCard(
    #[prop(into)] title: String,
    #[prop(optional)] icon: Option<Icon>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    render_card(
        CardConfig {
            title,
            icon,
            content: children,
        },
        class,
    )
}

/// Render a card from its typed configuration.
pub fn render_card(config: CardConfig<Children>, class: String) -> impl IntoView {
    let CardConfig {
        title,
        icon,
        content,
    } = config;
    let class = if class.is_empty() {
        "glass-card".to_string()
    } else {
        format!("glass-card {class}")
    };

    view! {
        <section class=class>
            <div class="glass-card-header">
                <h3 class="glass-card-title">
                    {icon.map(|i| view! { <span class=i.css_class() aria-hidden="true"></span> })}
                    {title}
                </h3>
            </div>
            {content()}
        </section>
    }
}
