use crate::session::{Credentials, LoginResult};
use crate::ui::Style;
use crate::web::{
    alert,
    auth::use_auth,
    components::{Button, TextInput},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const CONTAINER: &str = "display: flex; align-items: center; justify-content: center; min-height: 70vh; padding: 20px; background: linear-gradient(180deg, #0f172a 0%, #071033 100%)";
const CARD: &str = "background-color: #0f172a; color: #e6eef8; padding: 28px; border-radius: 12px; box-shadow: 0 10px 30px rgba(2, 6, 23, 0.6); width: 100%; max-width: 420px; font-family: Inter, 'Segoe UI', Roboto, Arial, sans-serif";
const BRAND: &str = "display: flex; align-items: center; gap: 12px; margin-bottom: 14px";
const LOGO: &str = "width: 40px; height: 40px; border-radius: 8px; background: linear-gradient(90deg, #2563EB, #7C3AED); display: flex; align-items: center; justify-content: center; color: #fff; font-weight: 700";
const BRAND_TEXT: &str = "font-weight: 700; font-size: 18px; color: #fff";
const TITLE: &str = "margin: 6px 0 4px; font-size: 20px; color: #f8fafc";
const SUBTITLE: &str = "margin: 0; color: #9aa7bf; font-size: 13px";
const FORM: &str = "margin-top: 14px";

#[derive(Clone)]
struct LoginInput {
    identifier: String,
    password: String,
}

/// Sign-in form. Field values are local, uncommitted UI state; the session
/// only changes through the auth context. Nothing is validated here.
#[component]
pub fn SignInCard() -> impl IntoView {
    let auth = use_auth();
    let (identifier, set_identifier) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let credentials = Credentials::from_identifier(&input.identifier, input.password);
            auth.login(credentials).await
        }
    });

    Effect::new(move |_| {
        if let Some(LoginResult::Failure { message }) = login_action.value().get() {
            alert(&message);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        login_action.dispatch(LoginInput {
            identifier: identifier.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div style=CONTAINER>
            <div style=CARD>
                <div style=BRAND>
                    <div style=LOGO>"EV"</div>
                    <div style=BRAND_TEXT>"Electroverse"</div>
                </div>

                <h2 style=TITLE>"Welcome back"</h2>
                <p style=SUBTITLE>"Secure access to encrypted recordings"</p>

                <form style=FORM on:submit=on_submit>
                    <TextInput
                        id="identifier"
                        label="Email or Username"
                        placeholder="name@company.com"
                        value=identifier
                        on_change=Callback::new(move |value: String| set_identifier.set(value))
                    />
                    <TextInput
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        on_change=Callback::new(move |value: String| set_password.set(value))
                    />

                    <div style="margin-top: 12px">
                        <Button
                            label="Sign In"
                            button_type="submit"
                            style=Style::from_pairs(&[("width", "100%")])
                            disabled=login_action.pending()
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
