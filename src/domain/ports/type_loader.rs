//! TypeLoader port - where type declarations come from
//!
//! Implemented by the source-tree parser and the TOML schema loader.

use crate::domain::entities::TypeShape;
use crate::domain::value_objects::TypePath;
use crate::error::GenResult;

pub trait TypeLoader {
    /// Load the declaration of `path`.
    ///
    /// A type that cannot be found fails with `GenError::ReflectionFailure`.
    fn load(&self, path: &TypePath) -> GenResult<TypeShape>;
}

impl<T: TypeLoader + ?Sized> TypeLoader for &T {
    fn load(&self, path: &TypePath) -> GenResult<TypeShape> {
        (**self).load(path)
    }
}

impl<T: TypeLoader + ?Sized> TypeLoader for Box<T> {
    fn load(&self, path: &TypePath) -> GenResult<TypeShape> {
        (**self).load(path)
    }
}
