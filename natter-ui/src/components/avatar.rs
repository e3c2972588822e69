//! Member avatar components - image with initial-letter fallback

use dioxus::prelude::*;

/// First letter of a display name, uppercased, `?` when the name is empty.
/// Skips a leading id sigil so "@rex:..." falls back to "R", not "@".
fn initial(name: &str) -> String {
    let name = name.strip_prefix(['@', '#']).unwrap_or(name);
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Circular placeholder showing the first letter of the name
#[component]
pub fn InitialAvatar(name: String, #[props(default = 48)] size: u32) -> Element {
    let font_px = size / 2;

    rsx! {
        div {
            class: "rounded-full bg-gray-700 text-gray-300 font-semibold flex items-center justify-center shrink-0 select-none",
            style: "width: {size}px; height: {size}px; font-size: {font_px}px;",
            "{initial(&name)}"
        }
    }
}

/// Member avatar - renders the profile image when one is set, otherwise an
/// initial-letter placeholder keyed off the display name.
#[component]
pub fn MemberAvatar(
    name: String,
    #[props(default)] avatar_url: Option<String>,
    #[props(default = 48)] size: u32,
) -> Element {
    rsx! {
        if let Some(url) = &avatar_url {
            img {
                src: "{url}",
                alt: "Avatar for {name}",
                class: "rounded-full object-cover shrink-0",
                style: "width: {size}px; height: {size}px;",
            }
        } else {
            InitialAvatar { name, size }
        }
    }
}
