//! Metadata extraction service
//!
//! Turns the raw [`TypeShape`] returned by a [`TypeLoader`] into
//! [`TypeMetadata`]: nullability is peeled off, base types are classified as
//! scalar or compound, compound names are resolved to full paths and the
//! constructor's return type is split into fallible and infallible.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::entities::{
    ConstructorMeta, ConstructorOutput, ConstructorShape, FallibleReturn, FieldMeta, MethodMeta,
    ParamMeta, TypeMetadata, TypeShape,
};
use crate::domain::ports::TypeLoader;
use crate::domain::value_objects::type_ref::{
    map_paths, normalize_type, split_generics, split_optional, strip_reference, unqualified,
};
use crate::domain::value_objects::{ScalarTypes, TypePath, TypeRef};
use crate::error::{GenError, GenResult};

/// Loads and classifies type declarations
pub struct MetadataExtractor<L> {
    loader: L,
    scalars: ScalarTypes,
}

impl<L: TypeLoader> MetadataExtractor<L> {
    pub fn new(loader: L, scalars: ScalarTypes) -> Self {
        Self { loader, scalars }
    }

    pub fn scalars(&self) -> &ScalarTypes {
        &self.scalars
    }

    /// Introspect the type at `path`
    pub fn extract(&self, path: &TypePath) -> GenResult<TypeMetadata> {
        let shape = self.loader.load(path)?;
        debug!(
            type_path = %path,
            fields = shape.fields.len(),
            methods = shape.methods.len(),
            "loaded type shape"
        );
        self.from_shape(path, &shape)
    }

    /// Classify an already loaded shape
    pub fn from_shape(&self, path: &TypePath, shape: &TypeShape) -> GenResult<TypeMetadata> {
        let scope = Scope {
            owner: path,
            imports: &shape.imports,
            scalars: &self.scalars,
        };

        let fields = shape
            .fields
            .iter()
            .map(|f| {
                Ok(FieldMeta {
                    name: f.name.clone(),
                    ty: self.type_ref(&scope, &f.ty)?,
                })
            })
            .collect::<GenResult<Vec<_>>>()?;

        let methods = shape
            .methods
            .iter()
            .map(|m| MethodMeta {
                name: m.name.clone(),
                returns: strip_reference(&m.returns),
            })
            .collect();

        let constructor = shape
            .constructor
            .as_ref()
            .map(|c| self.constructor(&scope, c))
            .transpose()?;

        Ok(TypeMetadata {
            path: path.clone(),
            fields,
            methods,
            constructor,
        })
    }

    fn constructor(&self, scope: &Scope<'_>, shape: &ConstructorShape) -> GenResult<ConstructorMeta> {
        let params = shape
            .params
            .iter()
            .map(|p| {
                Ok(ParamMeta {
                    name: p.name.clone(),
                    ty: self.type_ref(scope, &p.ty)?,
                })
            })
            .collect::<GenResult<Vec<_>>>()?;

        Ok(ConstructorMeta {
            name: shape.name.clone(),
            params,
            output: self.constructor_output(scope, &shape.returns)?,
        })
    }

    /// Classify a declared field or parameter type.
    ///
    /// Only plain paths can be compound. Anything else that is not a known
    /// scalar (`Vec<T>`, tuples, arrays) is stored as-is.
    fn type_ref(&self, scope: &Scope<'_>, declared: &str) -> GenResult<TypeRef> {
        let (nullable, base) = split_optional(declared);
        if self.scalars.is_scalar(&base) || TypePath::parse(&base).is_err() {
            return Ok(TypeRef::scalar(scope.qualify(&base)).with_nullable(nullable));
        }
        let path = scope.resolve(&base)?;
        Ok(TypeRef::compound(base, path).with_nullable(nullable))
    }

    fn constructor_output(&self, scope: &Scope<'_>, returns: &str) -> GenResult<ConstructorOutput> {
        let returns = normalize_type(returns);
        if scope.is_self(&returns) {
            return Ok(ConstructorOutput::Infallible);
        }

        let unsupported = || {
            GenError::reflection(
                scope.owner,
                format!("unsupported constructor return type '{}'", returns),
            )
        };

        let (head, args) = split_generics(&returns).ok_or_else(unsupported)?;
        if unqualified(&head) != "Result" || args.is_empty() || !scope.is_self(&args[0]) {
            return Err(unsupported());
        }

        let (result, result_import) = if head.contains("::") {
            (scope.render_qualified(&head)?, None)
        } else {
            match scope.imports.get("Result") {
                Some(full) => ("Result".to_string(), Some(scope.owner.resolve_relative(full)?)),
                None => ("Result".to_string(), None),
            }
        };

        let (error, error_import) = match args.get(1) {
            None => (None, None),
            Some(error) => {
                let (rendered, import) = self.error_type(scope, error)?;
                (Some(rendered), import)
            }
        };

        Ok(ConstructorOutput::Fallible(FallibleReturn {
            result,
            result_import,
            error,
            error_import,
        }))
    }

    /// How the error type of a fallible constructor is written in generated code
    fn error_type(&self, scope: &Scope<'_>, error: &str) -> GenResult<(String, Option<TypePath>)> {
        let Ok(parsed) = TypePath::parse(error) else {
            return Ok((error.to_string(), None));
        };
        if parsed.segments().len() > 1 {
            return Ok((scope.render_qualified(error)?, None));
        }
        if self.scalars.is_scalar(error) {
            return Ok((error.to_string(), None));
        }
        Ok((error.to_string(), Some(scope.resolve(error)?)))
    }
}

/// Name resolution inside the module that declares a type
struct Scope<'a> {
    owner: &'a TypePath,
    imports: &'a BTreeMap<String, String>,
    scalars: &'a ScalarTypes,
}

impl Scope<'_> {
    /// Resolve a type name through the imports, else relative to the owner
    fn resolve(&self, written: &str) -> GenResult<TypePath> {
        let parsed = TypePath::parse(written)?;
        let (first, rest) = parsed
            .segments()
            .split_first()
            .ok_or_else(|| GenError::reflection(self.owner, "empty type name"))?;

        if let Some(full) = self.imports.get(first) {
            let base = self.owner.resolve_relative(full)?;
            let mut segments = base.segments().to_vec();
            segments.extend(rest.iter().cloned());
            return Ok(TypePath::from_segments(segments));
        }
        self.owner.resolve_relative(written)
    }

    /// Render a qualified path so it is valid from any module
    fn render_qualified(&self, written: &str) -> GenResult<String> {
        let first = written.split("::").next().unwrap_or_default();
        if first == "self" || first == "super" || self.imports.contains_key(first) {
            Ok(self.resolve(written)?.to_string())
        } else {
            Ok(written.to_string())
        }
    }

    /// Spell out imported names so the type can be written in another module.
    ///
    /// A configured scalar that is neither imported nor qualified is declared
    /// next to the owner.
    fn qualify(&self, ty: &str) -> String {
        map_paths(ty, |path| {
            let (first, rest) = match path.split_once("::") {
                Some((first, rest)) => (first, Some(rest)),
                None => (path, None),
            };
            let Some(full) = self.imports.get(first) else {
                return (rest.is_none() && self.scalars.is_extra(first))
                    .then(|| self.owner.sibling(first).to_string());
            };
            let base = self.owner.resolve_relative(full).ok()?;
            Some(match rest {
                Some(rest) => format!("{}::{}", base, rest),
                None => base.to_string(),
            })
        })
    }

    fn is_self(&self, ty: &str) -> bool {
        ty == "Self"
            || ty == self.owner.short_name()
            || self
                .resolve(ty)
                .map(|path| &path == self.owner)
                .unwrap_or(false)
    }
}
