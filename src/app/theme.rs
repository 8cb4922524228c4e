use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub toggle: Callback<()>,
}

/// Installs the theme signal, persists it to local storage on the client,
/// and mirrors it as a `dark` class on the document root for the CSS.
pub fn provide_theme() {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        theme.set(stored.get_untracked());
        Effect::new(move |_| set_stored.set(theme.get()));
    }

    Effect::new(move |_| {
        let root = document()
            .document_element()
            .expect("document should have a root element");
        let classes = root.class_list();
        let result = if theme.get().is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        result.expect("should be able to toggle theme class");
    });

    let toggle = Callback::new(move |_| theme.update(|t| *t = t.toggled()));
    provide_context(ThemeContext {
        theme: theme.read_only(),
        toggle,
    });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
