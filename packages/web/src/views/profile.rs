use dioxus::prelude::*;
use ui::ProfileCard;

use crate::use_destination;

/// Protected: visitors without a session are sent to sign-in.
#[component]
pub fn Profile() -> Element {
    let on_navigate = use_destination();
    rsx! {
        ProfileCard { on_navigate }
    }
}
