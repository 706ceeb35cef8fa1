//! `define_port_error!`: error enums for the driven ports.
//!
//! The macro derives `thiserror::Error` from a `Variant { fields } => "message"`
//! list and adds one snake_case constructor per variant. Constructor
//! arguments take `impl Into<FieldType>`, so repository adapters can write
//! `ReviewRepositoryError::query("timeout")`.

macro_rules! define_port_error {
    (@ctor $name:ident $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $name:ident $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
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
                define_port_error!(@ctor $name $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SampleStoreError {
            Connection { message: String } => "store connection failed: {message}",
            Conflict { review_id: i64 } => "review {review_id} changed concurrently",
            Rejected { message: String, attempts: u32 } => "rejected after {attempts}: {message}",
            Closed => "store closed",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SampleStoreError::connection("refused");
        assert_eq!(err.to_string(), "store connection failed: refused");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = SampleStoreError::conflict(5_i64);
        assert_eq!(err, SampleStoreError::Conflict { review_id: 5 });
    }

    #[test]
    fn mixed_fields_are_all_converted() {
        let err = SampleStoreError::rejected("busy", 3_u32);
        assert_eq!(err.to_string(), "rejected after 3: busy");
    }

    #[test]
    fn unit_variants_get_a_plain_constructor() {
        assert_eq!(SampleStoreError::closed(), SampleStoreError::Closed);
    }
}
