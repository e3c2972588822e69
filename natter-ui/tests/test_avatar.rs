use dioxus::prelude::*;
use natter_ui::{InitialAvatar, MemberAvatar};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_member_avatar_renders_image_when_url_present() {
    fn app() -> Element {
        rsx! {
            MemberAvatar {
                name: "Mira Vance".to_string(),
                avatar_url: Some("/assets/avatar-mira.svg".to_string()),
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<img"));
    assert!(html.contains("src=\"/assets/avatar-mira.svg\""));
    assert!(html.contains("alt=\"Avatar for Mira Vance\""));
}

#[test]
fn test_member_avatar_falls_back_to_initial() {
    fn app() -> Element {
        rsx! {
            MemberAvatar { name: "Mira Vance".to_string() }
        }
    }

    let html = render(app);
    assert!(!html.contains("<img"));
    assert!(html.contains(">M<"));
}

#[test]
fn test_initial_is_uppercased() {
    fn app() -> Element {
        rsx! {
            InitialAvatar { name: "sol".to_string() }
        }
    }

    assert!(render(app).contains(">S<"));
}

#[test]
fn test_initial_skips_user_id_sigil() {
    fn app() -> Element {
        rsx! {
            InitialAvatar { name: "@rex:natter.chat".to_string() }
        }
    }

    assert!(render(app).contains(">R<"));
}

#[test]
fn test_empty_name_shows_placeholder() {
    fn app() -> Element {
        rsx! {
            InitialAvatar { name: String::new() }
        }
    }

    assert!(render(app).contains(">?<"));
}

#[test]
fn test_size_prop_sets_pixel_dimensions() {
    fn app() -> Element {
        rsx! {
            InitialAvatar { name: "Mira".to_string(), size: 96 }
        }
    }

    let html = render(app);
    assert!(html.contains("width: 96px"));
    assert!(html.contains("height: 96px"));
}
