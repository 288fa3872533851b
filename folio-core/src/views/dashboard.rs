//! Edit-mode chrome and the login/logout control

use maud::{html, Markup};

use crate::domain::{AuthState, LoginControl};
use crate::messages::Messages;

/// Banner shown across the top of the page in edit mode
pub fn edit_mode_banner(messages: &Messages) -> Markup {
    html! {
        div.edit-mode {
            span.edit-mode-label { (messages.message("dashboard.editMode")) }
            button.publish type="button" { (messages.message("dashboard.publish")) }
        }
    }
}

/// "modifier" button placed beside an editable element
///
/// The one beside the gallery title opens the modal.
pub fn modify_button(messages: &Messages, opens_modal: bool) -> Markup {
    html! {
        button.modify.open-project-modal[opens_modal] type="button" {
            (messages.message("dashboard.modify"))
        }
    }
}

/// Header link whose label was fixed when the page loaded
pub fn login_control(control: &LoginControl) -> Markup {
    let href = match control.state() {
        AuthState::Anonymous => "login.html",
        AuthState::Authenticated => "#logout",
    };
    html! {
        a.login href=(href) { (control.label()) }
    }
}
