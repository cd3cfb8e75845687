//! Macros for declaring controller states.

/// Generate a `State` implementation for a fieldless enum.
///
/// Variants listed under `final:` report `is_final() == true`.
///
/// # Example
///
/// ```
/// use infodeck::core::State;
/// use infodeck::state_enum;
///
/// state_enum! {
///     pub enum RevealState {
///         Hidden,
///         Revealing,
///         Shown,
///     }
///     final: [Shown]
/// }
///
/// assert_eq!(RevealState::Revealing.name(), "Revealing");
/// assert!(RevealState::Shown.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Visibility {
            Offscreen,
            Entering,
            Settled,
        }
        final: [Settled]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Visibility::Offscreen.name(), "Offscreen");
        assert!(!Visibility::Entering.is_final());
        assert!(Visibility::Settled.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum Toggle {
                Off,
                On,
            }
        }

        assert_eq!(Toggle::On.name(), "On");
        assert!(!Toggle::On.is_final());
        assert!(!Toggle::Off.is_final());
    }
}
