use crate::{ast::Type, types::base::GraphQLTypeRef};

impl<T> GraphQLTypeRef for Option<T>
where
    T: GraphQLTypeRef,
{
    fn type_ref() -> Type {
        T::type_ref().into_nullable()
    }
}

impl<T> GraphQLTypeRef for Vec<T>
where
    T: GraphQLTypeRef,
{
    fn type_ref() -> Type {
        T::type_ref().wrap_list()
    }
}

impl<T> GraphQLTypeRef for [T]
where
    T: GraphQLTypeRef,
{
    fn type_ref() -> Type {
        T::type_ref().wrap_list()
    }
}

impl<T, const N: usize> GraphQLTypeRef for [T; N]
where
    T: GraphQLTypeRef,
{
    fn type_ref() -> Type {
        T::type_ref().wrap_list()
    }
}
