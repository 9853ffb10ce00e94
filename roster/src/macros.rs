/// Declare a closed enumeration as a native Rust enum.
///
/// Each member becomes a unit variant; its value is anything convertible into
/// a [`Value`](crate::Value). The member table is built on first use and then
/// shared for the lifetime of the process.
///
/// ```rust
/// use roster::{declare_enumeration, Enumeration, Value};
///
/// declare_enumeration! {
///     pub enum Animal {
///         Horse = 0,
///         Dog = 1,
///     }
/// }
///
/// assert_eq!(Animal::value_of("Dog").unwrap(), &Value::Integer(1));
/// assert_eq!(Animal::name_of(&Value::Integer(0)).unwrap(), "Horse");
/// assert_eq!(Animal::names(), vec!["Horse", "Dog"]);
/// assert_eq!(Animal::Dog.to_string(), "Dog");
/// ```
///
/// Repeating a member name is a compile error, since it would repeat a
/// variant.
#[macro_export]
macro_rules! declare_enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::Enumeration for $name {
            fn enumeration() -> &'static $crate::EnumerationType {
                static ENUMERATION: ::std::sync::OnceLock<$crate::EnumerationType> =
                    ::std::sync::OnceLock::new();
                ENUMERATION.get_or_init(|| {
                    $crate::EnumerationType::native::<$name>(
                        ::std::stringify!($name),
                        ::std::vec![
                            $( $crate::Member::new(::std::stringify!($variant), $value) ),*
                        ],
                    )
                })
            }

            fn variants() -> &'static [Self] {
                &[$( $name::$variant ),*]
            }

            fn ordinal(self) -> usize {
                match self {
                    $( $name::$variant => $name::$variant as usize, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Enumeration::name(*self))
            }
        }
    };
}
