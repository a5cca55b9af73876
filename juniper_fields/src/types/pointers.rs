use std::{rc::Rc, sync::Arc};

use crate::{ast::Type, types::base::GraphQLTypeRef};

impl<T> GraphQLTypeRef for &T
where
    T: GraphQLTypeRef + ?Sized,
{
    fn type_ref() -> Type {
        T::type_ref()
    }
}

impl<T> GraphQLTypeRef for Box<T>
where
    T: GraphQLTypeRef + ?Sized,
{
    fn type_ref() -> Type {
        T::type_ref()
    }
}

impl<T> GraphQLTypeRef for Arc<T>
where
    T: GraphQLTypeRef + ?Sized,
{
    fn type_ref() -> Type {
        T::type_ref()
    }
}

impl<T> GraphQLTypeRef for Rc<T>
where
    T: GraphQLTypeRef + ?Sized,
{
    fn type_ref() -> Type {
        T::type_ref()
    }
}
