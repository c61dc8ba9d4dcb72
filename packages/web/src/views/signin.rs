use dioxus::prelude::*;
use ui::SignInPanel;

use crate::use_destination;

#[component]
pub fn SignIn() -> Element {
    let on_navigate = use_destination();
    rsx! {
        SignInPanel { on_navigate }
    }
}
