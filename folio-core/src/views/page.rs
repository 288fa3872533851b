//! Full page: header, edit-mode chrome or filter bar, gallery and modal

use maud::{html, Markup, DOCTYPE};

use super::dashboard::{edit_mode_banner, login_control, modify_button};
use crate::FolioContext;

pub fn render_page(ctx: &FolioContext) -> Markup {
    let messages = &ctx.messages;
    let editing = ctx.is_authenticated();

    html! {
        (DOCTYPE)
        html lang=(messages.language().code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Sophie Bluel - Architecte d'intérieur" }
            }
            body {
                @if editing {
                    (edit_mode_banner(messages))
                }
                header {
                    h1 { "Sophie Bluel" span { "Architecte d'intérieur" } }
                    nav {
                        ul {
                            li { "projets" }
                            li { "contact" }
                            li { (login_control(ctx.login_control())) }
                        }
                    }
                }
                main {
                    section #"introduction" {
                        figure {
                            img src="./assets/images/sophie-bluel.png" alt="";
                            @if editing {
                                (modify_button(messages, false))
                            }
                        }
                    }
                    section #"portfolio" {
                        div.portfolio-title {
                            h2 { (messages.message("gallery.title")) }
                            @if editing {
                                (modify_button(messages, true))
                            }
                        }
                        @if let Some(filter_bar) = ctx.filter_bar() {
                            (filter_bar.to_html())
                        }
                        @if ctx.gallery().is_empty() {
                            p.empty-gallery { (messages.message("gallery.empty")) }
                        }
                        (ctx.gallery().to_html())
                    }
                }
                @if let Some(modal) = ctx.modal() {
                    (modal.to_html(ctx.store(), messages))
                }
            }
        }
    }
}
