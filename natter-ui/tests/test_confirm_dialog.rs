use dioxus::prelude::*;
use natter_ui::{ActionTarget, ConfirmMemberActionView, GroupMember, Lang, RoomMember};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// The full opening tag (or element) around the first occurrence of `needle`
fn tag_around<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html.find(needle).expect("needle not in html");
    let start = html[..at].rfind('<').expect("no tag start before needle");
    let end = at + html[at..].find('>').expect("no tag end after needle");
    &html[start..=end]
}

fn mira() -> RoomMember {
    RoomMember {
        user_id: "@mira:natter.chat".to_string(),
        name: "Mira Vance".to_string(),
        avatar_url: Some("https://cdn.natter.chat/avatars/mira.png".to_string()),
    }
}

#[test]
fn test_room_target_shows_name_and_user_id() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Kick this user?".to_string(),
                action_label: "Kick".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Mira Vance"));
    assert!(html.contains("@mira:natter.chat"));
    // ">Name" skips the avatar's alt attribute and lands on the text slot
    assert!(tag_around(&html, ">Mira Vance").contains("member-name"));
    assert!(tag_around(&html, "@mira:natter.chat").contains("member-user-id"));
}

#[test]
fn test_room_member_avatar_uses_image_when_set() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Ban this user?".to_string(),
                action_label: "Ban".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("https://cdn.natter.chat/avatars/mira.png"));
    assert!(html.contains("Avatar for Mira Vance"));
}

#[test]
fn test_room_member_without_avatar_falls_back_to_initial() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(RoomMember {
                    user_id: "@sol:natter.chat".to_string(),
                    name: "sol".to_string(),
                    avatar_url: None,
                }),
                title: "Kick this user?".to_string(),
                action_label: "Kick".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(!html.contains("<img"));
    assert!(html.contains(">S<")); // uppercased initial placeholder
}

#[test]
fn test_group_target_uses_user_id_for_both_lines() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Group(GroupMember {
                    user_id: "@rex:natter.chat".to_string(),
                }),
                title: "Remove this user from the community?".to_string(),
                action_label: "Remove from community".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    // Name slot and id slot both carry the user id
    assert_eq!(html.matches("@rex:natter.chat").count(), 2);
    assert!(!html.contains("<img"));
    assert!(html.contains(">R<")); // initial skips the @ sigil
}

#[test]
fn test_reason_field_shown_only_when_asked() {
    fn with_reason() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Kick this user?".to_string(),
                action_label: "Kick".to_string(),
                ask_reason: true,
                on_complete: move |_| {},
            }
        }
    }
    fn without_reason() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Unban this user?".to_string(),
                action_label: "Unban".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let html = render(with_reason);
    assert!(html.contains("placeholder=\"Reason\""));

    let html = render(without_reason);
    assert!(!html.contains("<input"));
}

#[test]
fn test_autofocus_goes_to_reason_field_when_asked() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Ban this user?".to_string(),
                action_label: "Ban".to_string(),
                ask_reason: true,
                danger: true,
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("autofocus").count(), 1);
    assert!(tag_around(&html, "autofocus").starts_with("<input"));
}

#[test]
fn test_autofocus_goes_to_confirm_button_otherwise() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Unban this user?".to_string(),
                action_label: "Unban".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("autofocus").count(), 1);
    assert!(tag_around(&html, "autofocus").starts_with("<button"));
}

#[test]
fn test_danger_styles_only_the_confirm_button() {
    fn dangerous() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Ban this user?".to_string(),
                action_label: "Ban".to_string(),
                danger: true,
                on_complete: move |_| {},
            }
        }
    }
    fn plain() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Ban this user?".to_string(),
                action_label: "Ban".to_string(),
                on_complete: move |_| {},
            }
        }
    }

    let dangerous_html = render(dangerous);
    let plain_html = render(plain);

    assert!(dangerous_html.contains("bg-red-600"));
    assert!(!dangerous_html.contains("bg-indigo-600"));
    assert!(plain_html.contains("bg-indigo-600"));
    assert!(!plain_html.contains("bg-red-600"));

    // The cancel button is untouched by the danger flag
    assert_eq!(
        tag_around(&dangerous_html, "Cancel"),
        tag_around(&plain_html, "Cancel")
    );
    assert!(tag_around(&dangerous_html, "Cancel").contains("bg-gray-700"));
}

#[test]
fn test_dialog_chrome_follows_context_language() {
    fn app() -> Element {
        use_context_provider(|| Signal::new(Lang::De));
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Diesen Benutzer kicken?".to_string(),
                action_label: "Kicken".to_string(),
                ask_reason: true,
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains(">Abbrechen<"));
    assert!(html.contains("placeholder=\"Grund\""));
    assert!(html.contains("Dialog schließen"));
}

#[test]
fn test_title_and_action_label_render() {
    fn app() -> Element {
        rsx! {
            ConfirmMemberActionView {
                target: ActionTarget::Room(mira()),
                title: "Ban this user?".to_string(),
                action_label: "Ban".to_string(),
                danger: true,
                on_complete: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains(">Ban this user?<"));
    assert!(html.contains(">Ban<")); // confirm button label, distinct from the title
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
}
