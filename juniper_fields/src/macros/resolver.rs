/// Declares a function and wraps it into a [`Resolver`] reflecting its
/// signature.
///
/// The [`Signature`] gets the function's identifier as written, each parameter
/// typed via its [`GraphQLTypeRef`] and, when the function declares one, the
/// [`GraphQLTypeRef`] of its return type. A function without `->` has no
/// declared return type, so a field bound to it gets no type inferred.
///
/// The wrapped function is a plain `fn` pointer, retrievable via
/// [`Resolver::func()`].
///
/// ```rust
/// use juniper_fields::{resolver, ID};
///
/// let resolver = resolver! {
///     /// Looks a user name up.
///     fn user_name(id: ID, uppercase: Option<bool>) -> String {
///         let name = format!("user-{id}");
///         if uppercase.unwrap_or_default() {
///             name.to_uppercase()
///         } else {
///             name
///         }
///     }
/// };
///
/// let signature = resolver.signature();
/// assert_eq!(signature.name(), "user_name");
/// assert_eq!(signature.parameters()[1].param_type.as_ref().unwrap().to_string(), "Boolean");
/// assert_eq!(signature.return_type().unwrap().to_string(), "String!");
///
/// let func = resolver.func::<fn(ID, Option<bool>) -> String>().unwrap();
/// assert_eq!(func(ID::new("1"), Some(true)), "USER-1");
/// ```
///
/// [`GraphQLTypeRef`]: crate::GraphQLTypeRef
/// [`Resolver`]: crate::Resolver
/// [`Resolver::func()`]: crate::Resolver::func
/// [`Signature`]: crate::Signature
#[macro_export]
macro_rules! resolver {
    (
        $(#[$attr:meta])*
        fn $name:ident ( $( $arg:ident : $arg_ty:ty ),* $(,)? ) -> $ret:ty $body:block
    ) => {{
        $(#[$attr])*
        fn $name( $( $arg: $arg_ty ),* ) -> $ret $body

        $crate::Resolver::new(
            $name as fn( $( $arg_ty ),* ) -> $ret,
            $crate::__resolver_signature!($name, $( $arg: $arg_ty ),*)
                .returns(<$ret as $crate::GraphQLTypeRef>::type_ref()),
        )
    }};

    (
        $(#[$attr:meta])*
        fn $name:ident ( $( $arg:ident : $arg_ty:ty ),* $(,)? ) $body:block
    ) => {{
        $(#[$attr])*
        fn $name( $( $arg: $arg_ty ),* ) $body

        $crate::Resolver::new(
            $name as fn( $( $arg_ty ),* ),
            $crate::__resolver_signature!($name, $( $arg: $arg_ty ),*),
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __resolver_signature {
    ($name:ident, $( $arg:ident : $arg_ty:ty ),*) => {
        $crate::Signature::new(::core::stringify!($name))
            $(
                .parameter(
                    $crate::Parameter::new(::core::stringify!($arg))
                        .of_type(<$arg_ty as $crate::GraphQLTypeRef>::type_ref()),
                )
            )*
    };
}
