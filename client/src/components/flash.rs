//! One-shot flash messages carried in the query string.
//!
//! Form endpoints redirect back with `?error=` or `?notice=`; this component
//! renders whichever is present.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flash {
    Error(String),
    Notice(String),
}

impl Flash {
    /// Pick the flash to show. Errors win; blank values are ignored.
    pub fn from_query(error: Option<String>, notice: Option<String>) -> Option<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        present(error)
            .map(Self::Error)
            .or_else(|| present(notice).map(Self::Notice))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Notice(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Error(_) => "flash flash--error",
            Self::Notice(_) => "flash flash--notice",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            Self::Error(_) => "color: red",
            Self::Notice(_) => "color: green",
        }
    }
}

#[component]
pub fn FlashMessage() -> impl IntoView {
    let query = use_query_map();
    let flash = move || {
        let params = query.get();
        Flash::from_query(params.get("error"), params.get("notice"))
    };

    view! {
        {move || {
            flash()
                .map(|f| {
                    view! {
                        <p class=f.class() style=f.style()>
                            {f.text().to_owned()}
                        </p>
                    }
                })
        }}
    }
}
