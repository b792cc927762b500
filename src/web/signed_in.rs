use crate::ui::Style;
use crate::web::{auth::use_auth, components::Button};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};

/// Shown once the session is authenticated.
#[component]
pub fn SignedInPanel() -> impl IntoView {
    let auth = use_auth();

    let greeting = move || {
        auth.user
            .get()
            .map(|user| {
                if user.role.is_empty() {
                    format!("Signed in as {}", user.username)
                } else {
                    format!("Signed in as {} ({})", user.username, user.role)
                }
            })
            .unwrap_or_default()
    };

    let on_logout = move |_: MouseEvent| {
        spawn_local(async move {
            auth.logout().await;
        });
    };

    view! {
        <div style="display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 20px">
            <span>{greeting}</span>
            <Button
                label="Sign Out"
                on_click=Callback::new(on_logout)
                style=Style::from_pairs(&[("background-color", "#334155")])
            />
        </div>
    }
}
