//! Helper macro generating the error enums carried by domain ports.
//!
//! Port errors are plain data: a tagged kind plus a human-readable message.
//! The macro derives `thiserror::Error` and emits a snake_case constructor
//! per variant so adapters can build errors without naming struct fields.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExampleStoreError {
            Unreachable { message: String } => "store unreachable: {message}",
            Timeout { seconds: u32 } => "store timed out after {seconds}s",
            Rejected { message: String, attempt: u32 } => "rejected: {message} (attempt {attempt})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExampleStoreError::unreachable("dns failure");
        assert_eq!(err.to_string(), "store unreachable: dns failure");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExampleStoreError::timeout(30_u32);
        assert_eq!(err.to_string(), "store timed out after 30s");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExampleStoreError::rejected("duplicate", 2_u32);
        assert_eq!(err.to_string(), "rejected: duplicate (attempt 2)");
    }
}
