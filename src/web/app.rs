use crate::web::{SignInCard, SignedInPanel, auth::AuthProvider, auth::use_auth};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Home />
        </AuthProvider>
    }
}

#[component]
fn Home() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            if auth.is_authenticated.get() {
                view! { <SignedInPanel /> }.into_any()
            } else {
                view! { <SignInCard /> }.into_any()
            }
        }}
    }
}
