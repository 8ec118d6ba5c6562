/// Declares a fieldless enum whose members carry a raw string value and can
/// key an [`EnumMap`](crate::EnumMap).
///
/// ```
/// tabula::enum_key! {
///     pub enum Mode {
///         Fast = "fast",
///         Safe = "safe",
///     }
/// }
///
/// assert_eq!(Mode::Fast.value(), "fast");
/// assert_eq!(Mode::try_from("safe").unwrap(), Mode::Safe);
/// assert!("slow".parse::<Mode>().is_err());
/// ```
#[macro_export]
macro_rules! enum_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the raw value the member was declared with.
            #[allow(dead_code)]
            $vis const fn value(self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl $crate::EnumKey for $name {
            fn members() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(value: &str) -> $crate::Result<Self> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err($crate::Error::key_not_found(value)),
                }
            }
        }

        impl ::core::convert::TryFrom<::std::string::String> for $name {
            type Error = $crate::Error;

            fn try_from(value: ::std::string::String) -> $crate::Result<Self> {
                <Self as ::core::convert::TryFrom<&str>>::try_from(value.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                <Self as ::core::convert::TryFrom<&str>>::try_from(s)
            }
        }
    };
}
