//! Helper macro for generating port error enums.
//!
//! Each port owns a small thiserror enum; the macro adds snake_case
//! constructors that accept `impl Into<…>` for every field so call sites can
//! pass `&str` where the variant stores `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Broken { message: String } => "broken: {message}",
            Counted { message: String, count: u32 } => "counted: {message} ({count})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::broken("hello");
        assert_eq!(err.to_string(), "broken: hello");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::counted("hello", 3_u32);
        assert_eq!(err.to_string(), "counted: hello (3)");
    }
}
